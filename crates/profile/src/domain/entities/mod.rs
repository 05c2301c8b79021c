// crates/profile/src/domain/entities/mod.rs

mod profile;
mod profile_patch;

pub use profile::Profile;
pub use profile_patch::ProfilePatch;
