// crates/problem/src/infrastructure/rest/repositories/rest_comment_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::Comment;
use crate::domain::repositories::CommentRepository;
use crate::domain::value_objects::ProblemId;
use crate::infrastructure::rest::COMMENTS_TABLE;

pub struct RestCommentRepository {
    ctx: RestContext,
}

impl RestCommentRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommentRepository for RestCommentRepository {
    async fn find_by_problem(&self, problem_id: &ProblemId) -> Result<Vec<Comment>> {
        self.ctx
            .from(COMMENTS_TABLE)
            .select("*")
            .eq("problem_id", problem_id)
            .order("created_at", true)
            .fetch::<Comment>()
            .await
            .map_domain::<Comment>()
    }

    async fn insert(&self, comment: &Comment) -> Result<Comment> {
        let rows = self
            .ctx
            .from(COMMENTS_TABLE)
            .insert::<_, Comment>(comment)
            .await
            .map_domain::<Comment>()?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::Internal("Comment insert returned no row".into()))
    }
}
