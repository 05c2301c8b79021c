// crates/profile/tests/integration.rs

mod infrastructure;
