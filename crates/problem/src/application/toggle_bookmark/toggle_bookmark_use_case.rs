// crates/problem/src/application/toggle_bookmark/toggle_bookmark_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::toggle_bookmark::ToggleBookmarkCommand;
use crate::domain::entities::ProblemBookmark;
use crate::domain::repositories::BookmarkRepository;

/// Inverse l'état du favori et renvoie le nouvel état (`true` = en favori).
///
/// La suppression est tentée d'abord : son résultat dit si le favori existait,
/// sans lecture préalable. Deux appels concurrents convergent vers un état
/// valide (au plus une ligne) grâce à l'ajout idempotent.
pub struct ToggleBookmarkUseCase {
    repo: Arc<dyn BookmarkRepository>,
    clock: Arc<dyn Clock>,
}

impl ToggleBookmarkUseCase {
    pub fn new(repo: Arc<dyn BookmarkRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: ToggleBookmarkCommand) -> Result<bool> {
        let bookmarked = if self.repo.remove(&cmd.user_id, &cmd.problem_id).await? {
            false
        } else {
            let bookmark = ProblemBookmark::new(cmd.user_id, cmd.problem_id, self.clock.now());
            self.repo.add(&bookmark).await?;
            true
        };

        tracing::info!(
            user_id = %cmd.user_id,
            problem_id = %cmd.problem_id,
            bookmarked,
            "Bookmark toggled"
        );
        Ok(bookmarked)
    }
}
