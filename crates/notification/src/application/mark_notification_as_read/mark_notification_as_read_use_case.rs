// crates/notification/src/application/mark_notification_as_read/mark_notification_as_read_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::Result;

use crate::application::mark_notification_as_read::MarkNotificationAsReadCommand;
use crate::domain::entities::Notification;
use crate::domain::repositories::NotificationRepository;

/// Idempotent : relire une notification déjà lue réussit
pub struct MarkNotificationAsReadUseCase {
    repo: Arc<dyn NotificationRepository>,
}

impl MarkNotificationAsReadUseCase {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: MarkNotificationAsReadCommand) -> Result<()> {
        if !self.repo.mark_as_read(&cmd.notification_id).await? {
            return Err(Notification::not_found(cmd.notification_id));
        }

        tracing::debug!(notification_id = %cmd.notification_id, "Notification marked as read");
        Ok(())
    }
}
