// crates/notification/src/domain/repositories/notification_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::Notification;
use crate::domain::value_objects::NotificationId;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Notifications d'un utilisateur, created_at décroissant
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Notification>>;

    /// Passe `is_read` à vrai ; `false` si aucune ligne ne correspond
    async fn mark_as_read(&self, id: &NotificationId) -> Result<bool>;
}
