mod profile_builder;

pub use profile_builder::ProfileBuilder;
