// crates/notification/src/application/mod.rs

#[cfg(test)]
mod fixtures;

pub mod get_notifications;
pub mod mark_notification_as_read;
