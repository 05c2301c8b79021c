// crates/notification/src/infrastructure/rest/repositories/rest_notification_repository.rs

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Serialize;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::Notification;
use crate::domain::repositories::NotificationRepository;
use crate::domain::value_objects::NotificationId;
use crate::infrastructure::rest::NOTIFICATIONS_TABLE;

#[derive(Serialize)]
struct MarkRead {
    is_read: bool,
}

pub struct RestNotificationRepository {
    ctx: RestContext,
}

impl RestNotificationRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl NotificationRepository for RestNotificationRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Notification>> {
        self.ctx
            .from(NOTIFICATIONS_TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at", false)
            .fetch::<Notification>()
            .await
            .map_domain::<Notification>()
    }

    async fn mark_as_read(&self, id: &NotificationId) -> Result<bool> {
        let updated = self
            .ctx
            .from(NOTIFICATIONS_TABLE)
            .eq("id", id)
            .update::<_, IgnoredAny>(&MarkRead { is_read: true })
            .await
            .map_domain::<Notification>()?;

        Ok(!updated.is_empty())
    }
}
