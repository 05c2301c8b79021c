// crates/shared-kernel/src/infrastructure/mod.rs

pub mod pagination;

#[cfg(feature = "rest")]
pub mod rest;
