// crates/notification/src/domain/repositories/notification_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Notification;
use crate::domain::repositories::NotificationRepository;
use crate::domain::value_objects::NotificationId;

#[derive(Default)]
pub struct NotificationRepositoryStub {
    pub notifications: Mutex<Vec<Notification>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl NotificationRepositoryStub {
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        let stub = Self::default();
        *stub.notifications.lock().unwrap() = notifications;
        stub
    }

    pub fn stored(&self, id: &NotificationId) -> Option<Notification> {
        self.notifications.lock().unwrap().iter().find(|n| &n.id == id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryStub {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Notification>> {
        self.check_error()?;
        let mut mine: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| &n.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn mark_as_read(&self, id: &NotificationId) -> Result<bool> {
        self.check_error()?;
        let mut all = self.notifications.lock().unwrap();
        Ok(all
            .iter_mut()
            .find(|n| &n.id == id)
            .map(|n| n.is_read = true)
            .is_some())
    }
}
