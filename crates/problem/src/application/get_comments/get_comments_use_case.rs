// crates/problem/src/application/get_comments/get_comments_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::author_join::attach_authors;
use crate::application::get_comments::GetCommentsCommand;
use crate::domain::entities::{Authored, Comment};
use crate::domain::repositories::{AuthorRepository, CommentRepository};

/// Fil de discussion d'un problème, du plus ancien au plus récent
pub struct GetCommentsUseCase {
    comments: Arc<dyn CommentRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl GetCommentsUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { comments, authors }
    }

    pub async fn execute(&self, cmd: GetCommentsCommand) -> Result<Vec<Authored<Comment>>> {
        let rows = self.comments.find_by_problem(&cmd.problem_id).await?;
        attach_authors(rows, self.authors.as_ref()).await
    }
}
