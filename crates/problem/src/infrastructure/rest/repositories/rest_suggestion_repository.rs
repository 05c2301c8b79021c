// crates/problem/src/infrastructure/rest/repositories/rest_suggestion_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::ProblemSuggestion;
use crate::domain::repositories::SuggestionRepository;
use crate::domain::value_objects::{ProblemId, SuggestionId, SuggestionStatus};
use crate::infrastructure::rest::rows::RestStatusUpdate;
use crate::infrastructure::rest::SUGGESTIONS_TABLE;

pub struct RestSuggestionRepository {
    ctx: RestContext,
}

impl RestSuggestionRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl SuggestionRepository for RestSuggestionRepository {
    async fn insert(&self, suggestion: &ProblemSuggestion) -> Result<ProblemSuggestion> {
        let rows = self
            .ctx
            .from(SUGGESTIONS_TABLE)
            .insert::<_, ProblemSuggestion>(suggestion)
            .await
            .map_domain::<ProblemSuggestion>()?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::Internal("Suggestion insert returned no row".into()))
    }

    async fn update_status(
        &self,
        id: &SuggestionId,
        status: SuggestionStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ProblemSuggestion>> {
        let rows = self
            .ctx
            .from(SUGGESTIONS_TABLE)
            .eq("id", id)
            .update::<_, ProblemSuggestion>(&RestStatusUpdate { status, updated_at })
            .await
            .map_domain::<ProblemSuggestion>()?;

        Ok(rows.into_iter().next())
    }

    async fn find_by_problem(&self, problem_id: &ProblemId) -> Result<Vec<ProblemSuggestion>> {
        self.ctx
            .from(SUGGESTIONS_TABLE)
            .select("*")
            .eq("problem_id", problem_id)
            .order("created_at", true)
            .fetch::<ProblemSuggestion>()
            .await
            .map_domain::<ProblemSuggestion>()
    }
}
