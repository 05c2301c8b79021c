// crates/profile/src/infrastructure/rest/mod.rs

pub mod repositories;
pub mod rows;

/// Table distante des profils
pub(crate) const PROFILES_TABLE: &str = "profiles";
