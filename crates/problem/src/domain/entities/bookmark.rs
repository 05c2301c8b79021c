// crates/problem/src/domain/entities/bookmark.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::ProblemId;

/// Favori : unique sur (user_id, problem_id)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemBookmark {
    pub user_id: UserId,
    pub problem_id: ProblemId,
    pub created_at: DateTime<Utc>,
}

impl ProblemBookmark {
    pub fn new(user_id: UserId, problem_id: ProblemId, now: DateTime<Utc>) -> Self {
        Self { user_id, problem_id, created_at: now }
    }
}

impl EntityMetadata for ProblemBookmark {
    fn entity_name() -> &'static str {
        "ProblemBookmark"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "problem_bookmarks_user_id_problem_id_key" | "problem_bookmarks_pkey" => "problem_id",
            _ => "unique_constraint",
        }
    }
}
