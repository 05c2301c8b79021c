// crates/profile/src/application/get_profile/get_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::get_profile::GetProfileCommand;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

/// Lecture seule : ne crée jamais de ligne (voir `GetOrCreateProfileUseCase`)
pub struct GetProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: GetProfileCommand) -> Result<Option<Profile>> {
        self.repo.find_by_id(&cmd.user_id).await
    }
}
