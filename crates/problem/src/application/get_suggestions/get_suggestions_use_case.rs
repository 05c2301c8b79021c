// crates/problem/src/application/get_suggestions/get_suggestions_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::author_join::attach_authors;
use crate::application::get_suggestions::GetSuggestionsCommand;
use crate::domain::entities::{Authored, ProblemSuggestion};
use crate::domain::repositories::{AuthorRepository, SuggestionRepository};

pub struct GetSuggestionsUseCase {
    suggestions: Arc<dyn SuggestionRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl GetSuggestionsUseCase {
    pub fn new(suggestions: Arc<dyn SuggestionRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { suggestions, authors }
    }

    pub async fn execute(&self, cmd: GetSuggestionsCommand) -> Result<Vec<Authored<ProblemSuggestion>>> {
        let rows = self.suggestions.find_by_problem(&cmd.problem_id).await?;
        attach_authors(rows, self.authors.as_ref()).await
    }
}
