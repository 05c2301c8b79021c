// crates/profile/src/application/update_profile/update_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;

use crate::application::update_profile::UpdateProfileCommand;
use crate::domain::entities::{Profile, ProfilePatch};
use crate::domain::repositories::ProfileRepository;

pub struct UpdateProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: UpdateProfileCommand) -> Result<Profile> {
        // 1. Validation locale avant tout appel distant
        let patch = normalize(cmd.patch)?;

        // 2. updated_at est toujours estampillé, même pour un patch vide
        let updated = self
            .repo
            .update(&cmd.user_id, &patch, self.clock.now())
            .await?
            .ok_or_not_found(cmd.user_id)?;

        tracing::info!(user_id = %cmd.user_id, "Profile updated");
        Ok(updated)
    }
}

fn normalize(mut patch: ProfilePatch) -> Result<ProfilePatch> {
    if let Some(links) = &patch.social_links {
        links.validate()?;
    }
    patch.full_name = patch.full_name.map(clean_free_text);
    patch.location = patch.location.map(clean_free_text);
    Ok(patch)
}

/// Texte libre : trim, et une valeur vide efface la colonne
fn clean_free_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
