// crates/notification/src/application/mark_notification_as_read/mark_notification_as_read_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NotificationId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkNotificationAsReadCommand {
    pub notification_id: NotificationId,
}
