// crates/problem/src/application/remove_bookmark/remove_bookmark_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::remove_bookmark::RemoveBookmarkCommand;
use crate::domain::repositories::BookmarkRepository;

/// Suppression idempotente : retirer un favori absent réussit et renvoie `false`
pub struct RemoveBookmarkUseCase {
    repo: Arc<dyn BookmarkRepository>,
}

impl RemoveBookmarkUseCase {
    pub fn new(repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: RemoveBookmarkCommand) -> Result<bool> {
        let removed = self.repo.remove(&cmd.user_id, &cmd.problem_id).await?;
        if removed {
            tracing::info!(user_id = %cmd.user_id, problem_id = %cmd.problem_id, "Bookmark removed");
        }
        Ok(removed)
    }
}
