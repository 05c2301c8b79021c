mod rest_error_mapper;

pub use rest_error_mapper::{to_domain_error, RestErrorExt};
