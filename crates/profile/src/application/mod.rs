// crates/profile/src/application/mod.rs

pub mod get_or_create_profile;
pub mod get_profile;
pub mod update_profile;
