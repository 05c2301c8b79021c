// crates/profile/src/application/get_or_create_profile/get_or_create_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::{DomainError, Result};

use crate::application::get_or_create_profile::GetOrCreateProfileCommand;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct GetOrCreateProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl GetOrCreateProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: GetOrCreateProfileCommand) -> Result<Profile> {
        // 1. Chemin nominal : le profil existe déjà
        if let Some(profile) = self.repo.find_by_id(&cmd.user_id).await? {
            return Ok(profile);
        }

        // 2. Premier accès : profil minimal avec pseudo généré
        let now = self.clock.now();
        match self.insert_placeholder(Profile::placeholder(cmd.user_id, now)).await {
            // 3. Pseudo court déjà porté par un autre utilisateur
            Err(DomainError::AlreadyExists { field: "username", .. }) => {
                tracing::warn!(user_id = %cmd.user_id, "Placeholder username taken, using extended form");
                self.insert_placeholder(Profile::extended_placeholder(cmd.user_id, now)).await
            }
            other => other,
        }
    }

    async fn insert_placeholder(&self, placeholder: Profile) -> Result<Profile> {
        let user_id = placeholder.id;

        match self.repo.insert(&placeholder).await {
            Ok(created) => {
                tracing::info!(user_id = %user_id, "Placeholder profile created");
                Ok(created)
            }
            // Course perdue : un autre appel a créé la ligne entre-temps
            Err(DomainError::AlreadyExists { field: "id" | "unique_constraint", .. }) => {
                tracing::warn!(user_id = %user_id, "Profile created concurrently, re-reading");
                self.repo.find_by_id(&user_id).await?.ok_or_not_found(user_id)
            }
            Err(e) => Err(e),
        }
    }
}
