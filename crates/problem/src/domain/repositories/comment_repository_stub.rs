// crates/problem/src/domain/repositories/comment_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Comment;
use crate::domain::repositories::CommentRepository;
use crate::domain::value_objects::ProblemId;

#[derive(Default)]
pub struct CommentRepositoryStub {
    pub comments: Mutex<Vec<Comment>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl CommentRepositoryStub {
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let stub = Self::default();
        *stub.comments.lock().unwrap() = comments;
        stub
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryStub {
    async fn find_by_problem(&self, problem_id: &ProblemId) -> Result<Vec<Comment>> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let mut found: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| &c.problem_id == problem_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }

    async fn insert(&self, comment: &Comment) -> Result<Comment> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment.clone())
    }
}
