// crates/problem/src/application/create_comment/create_comment_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::create_comment::CreateCommentCommand;
use crate::domain::entities::Comment;
use crate::domain::repositories::CommentRepository;

pub struct CreateCommentUseCase {
    repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateCommentUseCase {
    pub fn new(repo: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: CreateCommentCommand) -> Result<Comment> {
        let comment = Comment::new(cmd.problem_id, cmd.user_id, cmd.content, self.clock.now());
        let created = self.repo.insert(&comment).await?;

        tracing::info!(comment_id = %created.id, problem_id = %created.problem_id, "Comment created");
        Ok(created)
    }
}
