// crates/notification/src/application/get_notifications/get_notifications_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::get_notifications::GetNotificationsCommand;
use crate::domain::entities::Notification;
use crate::domain::repositories::NotificationRepository;

pub struct GetNotificationsUseCase {
    repo: Arc<dyn NotificationRepository>,
}

impl GetNotificationsUseCase {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: GetNotificationsCommand) -> Result<Vec<Notification>> {
        self.repo.find_by_user(&cmd.user_id).await
    }
}
