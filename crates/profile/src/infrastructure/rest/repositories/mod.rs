mod rest_profile_repository;

pub use rest_profile_repository::RestProfileRepository;
