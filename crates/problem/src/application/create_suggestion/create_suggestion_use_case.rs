// crates/problem/src/application/create_suggestion/create_suggestion_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::create_suggestion::CreateSuggestionCommand;
use crate::domain::entities::ProblemSuggestion;
use crate::domain::repositories::SuggestionRepository;

pub struct CreateSuggestionUseCase {
    repo: Arc<dyn SuggestionRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateSuggestionUseCase {
    pub fn new(repo: Arc<dyn SuggestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: CreateSuggestionCommand) -> Result<ProblemSuggestion> {
        let suggestion = ProblemSuggestion::new(cmd.problem_id, cmd.user_id, cmd.content, self.clock.now());
        let created = self.repo.insert(&suggestion).await?;

        tracing::info!(suggestion_id = %created.id, problem_id = %created.problem_id, "Suggestion created");
        Ok(created)
    }
}
