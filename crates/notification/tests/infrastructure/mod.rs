// crates/notification/tests/infrastructure/mod.rs

mod notification_repository_it;
