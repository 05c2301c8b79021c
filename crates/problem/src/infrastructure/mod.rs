// crates/problem/src/infrastructure/mod.rs

#[cfg(feature = "rest")]
pub mod rest;
