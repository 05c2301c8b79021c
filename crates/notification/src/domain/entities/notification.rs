// crates/notification/src/domain/entities/notification.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;
use uuid::Uuid;

use crate::domain::value_objects::NotificationId;

/// Notification destinée à un utilisateur.
/// Créée côté serveur ; seul `is_read` évolue ensuite.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    /// Nature de l'événement (texte libre côté backend, ex. `comment`)
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    /// Élément concerné (problème, commentaire...) selon `kind`
    #[serde(default)]
    pub reference_id: Option<Uuid>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl EntityMetadata for Notification {
    fn entity_name() -> &'static str {
        "Notification"
    }
}
