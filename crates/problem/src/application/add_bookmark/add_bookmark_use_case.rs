// crates/problem/src/application/add_bookmark/add_bookmark_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::add_bookmark::AddBookmarkCommand;
use crate::domain::entities::ProblemBookmark;
use crate::domain::repositories::BookmarkRepository;

/// Ajout idempotent : `true` si le favori a été créé, `false` s'il existait déjà
pub struct AddBookmarkUseCase {
    repo: Arc<dyn BookmarkRepository>,
    clock: Arc<dyn Clock>,
}

impl AddBookmarkUseCase {
    pub fn new(repo: Arc<dyn BookmarkRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: AddBookmarkCommand) -> Result<bool> {
        let bookmark = ProblemBookmark::new(cmd.user_id, cmd.problem_id, self.clock.now());

        let created = self.repo.add(&bookmark).await?;
        if created {
            tracing::info!(user_id = %cmd.user_id, problem_id = %cmd.problem_id, "Bookmark added");
        } else {
            tracing::debug!(user_id = %cmd.user_id, problem_id = %cmd.problem_id, "Bookmark already present");
        }
        Ok(created)
    }
}
