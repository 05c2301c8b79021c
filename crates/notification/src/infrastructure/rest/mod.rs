// crates/notification/src/infrastructure/rest/mod.rs

pub mod repositories;

pub(crate) const NOTIFICATIONS_TABLE: &str = "notifications";
