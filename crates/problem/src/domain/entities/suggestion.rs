// crates/problem/src/domain/entities/suggestion.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::HasAuthor;
use crate::domain::value_objects::{ProblemId, SuggestionContent, SuggestionId, SuggestionStatus};

/// Solution proposée par un utilisateur
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemSuggestion {
    pub id: SuggestionId,
    pub problem_id: ProblemId,
    pub user_id: UserId,
    pub content: SuggestionContent,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemSuggestion {
    pub fn new(problem_id: ProblemId, user_id: UserId, content: SuggestionContent, now: DateTime<Utc>) -> Self {
        Self {
            id: SuggestionId::new(),
            problem_id,
            user_id,
            content,
            status: SuggestionStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

impl EntityMetadata for ProblemSuggestion {
    fn entity_name() -> &'static str {
        "ProblemSuggestion"
    }
}

impl HasAuthor for ProblemSuggestion {
    fn author_id(&self) -> UserId {
        self.user_id
    }
}
