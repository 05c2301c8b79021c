// crates/notification/src/application/get_notifications/get_notifications_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNotificationsCommand {
    pub user_id: UserId,
}
