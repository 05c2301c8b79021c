// crates/notification/src/application/fixtures.rs
#![cfg(test)]

use chrono::{Duration, TimeZone, Utc};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::Notification;
use crate::domain::value_objects::NotificationId;

/// Notification non lue créée `minutes` après le 1er mai 2024
pub fn notification(user_id: UserId, content: &str, minutes: i64) -> Notification {
    Notification {
        id: NotificationId::new(),
        user_id,
        kind: "comment".into(),
        content: content.into(),
        reference_id: None,
        is_read: false,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}
