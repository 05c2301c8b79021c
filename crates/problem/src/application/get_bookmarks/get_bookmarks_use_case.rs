// crates/problem/src/application/get_bookmarks/get_bookmarks_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::get_bookmarks::GetBookmarksCommand;
use crate::domain::entities::{Authored, ProblemView};
use crate::domain::repositories::BookmarkRepository;

/// Problèmes mis en favori, du favori le plus récent au plus ancien.
/// Auteur et catégorie arrivent embarqués dans la même requête.
pub struct GetBookmarksUseCase {
    repo: Arc<dyn BookmarkRepository>,
}

impl GetBookmarksUseCase {
    pub fn new(repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: GetBookmarksCommand) -> Result<Vec<Authored<ProblemView>>> {
        let problems = self.repo.find_by_user(&cmd.user_id).await?;
        tracing::debug!(user_id = %cmd.user_id, count = problems.len(), "Bookmarks loaded");
        Ok(problems)
    }
}
