// crates/problem/src/domain/entities/comment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::HasAuthor;
use crate::domain::value_objects::{CommentContent, CommentId, ProblemId};

/// Commentaire : immuable une fois créé
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub problem_id: ProblemId,
    pub user_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(problem_id: ProblemId, user_id: UserId, content: CommentContent, now: DateTime<Utc>) -> Self {
        Self {
            id: CommentId::new(),
            problem_id,
            user_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

impl EntityMetadata for Comment {
    fn entity_name() -> &'static str {
        "Comment"
    }
}

impl HasAuthor for Comment {
    fn author_id(&self) -> UserId {
        self.user_id
    }
}
