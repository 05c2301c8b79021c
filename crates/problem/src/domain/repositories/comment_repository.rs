// crates/problem/src/domain/repositories/comment_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Comment;
use crate::domain::value_objects::ProblemId;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Commentaires d'un problème, created_at croissant
    async fn find_by_problem(&self, problem_id: &ProblemId) -> Result<Vec<Comment>>;

    async fn insert(&self, comment: &Comment) -> Result<Comment>;
}
