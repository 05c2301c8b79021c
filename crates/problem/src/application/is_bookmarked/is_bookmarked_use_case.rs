// crates/problem/src/application/is_bookmarked/is_bookmarked_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::is_bookmarked::IsBookmarkedCommand;
use crate::domain::repositories::BookmarkRepository;

pub struct IsBookmarkedUseCase {
    repo: Arc<dyn BookmarkRepository>,
}

impl IsBookmarkedUseCase {
    pub fn new(repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: IsBookmarkedCommand) -> Result<bool> {
        self.repo.exists(&cmd.user_id, &cmd.problem_id).await
    }
}
