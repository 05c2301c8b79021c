// crates/problem/src/application/update_suggestion_status/update_suggestion_status_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::update_suggestion_status::UpdateSuggestionStatusCommand;
use crate::domain::entities::ProblemSuggestion;
use crate::domain::repositories::SuggestionRepository;

/// Toute transition est acceptée, y compris revenir à `pending`
pub struct UpdateSuggestionStatusUseCase {
    repo: Arc<dyn SuggestionRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateSuggestionStatusUseCase {
    pub fn new(repo: Arc<dyn SuggestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: UpdateSuggestionStatusCommand) -> Result<ProblemSuggestion> {
        let updated = self
            .repo
            .update_status(&cmd.suggestion_id, cmd.status, self.clock.now())
            .await?
            .ok_or_not_found(cmd.suggestion_id)?;

        tracing::info!(suggestion_id = %updated.id, status = %updated.status, "Suggestion status updated");
        Ok(updated)
    }
}
