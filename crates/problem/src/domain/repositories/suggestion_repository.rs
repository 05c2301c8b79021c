// crates/problem/src/domain/repositories/suggestion_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::Result;

use crate::domain::entities::ProblemSuggestion;
use crate::domain::value_objects::{ProblemId, SuggestionId, SuggestionStatus};

#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn insert(&self, suggestion: &ProblemSuggestion) -> Result<ProblemSuggestion>;

    async fn update_status(
        &self,
        id: &SuggestionId,
        status: SuggestionStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ProblemSuggestion>>;

    /// Suggestions d'un problème, created_at croissant
    async fn find_by_problem(&self, problem_id: &ProblemId) -> Result<Vec<ProblemSuggestion>>;
}
