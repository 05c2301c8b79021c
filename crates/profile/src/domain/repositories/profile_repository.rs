// crates/profile/src/domain/repositories/profile_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::{Profile, ProfilePatch};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// `Ok(None)` si aucune ligne ; les pannes distantes restent des erreurs.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>>;

    /// Insère le profil et renvoie la ligne stockée.
    /// `AlreadyExists` si une ligne existe déjà pour cet id.
    async fn insert(&self, profile: &Profile) -> Result<Profile>;

    /// Mise à jour partielle ; `Ok(None)` si aucune ligne ne correspond.
    async fn update(
        &self,
        id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Profile>>;
}
