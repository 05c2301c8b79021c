// crates/problem/src/domain/repositories/suggestion_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::ProblemSuggestion;
use crate::domain::repositories::SuggestionRepository;
use crate::domain::value_objects::{ProblemId, SuggestionId, SuggestionStatus};

#[derive(Default)]
pub struct SuggestionRepositoryStub {
    pub suggestions: Mutex<Vec<ProblemSuggestion>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl SuggestionRepositoryStub {
    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SuggestionRepository for SuggestionRepositoryStub {
    async fn insert(&self, suggestion: &ProblemSuggestion) -> Result<ProblemSuggestion> {
        self.check_error()?;
        self.suggestions.lock().unwrap().push(suggestion.clone());
        Ok(suggestion.clone())
    }

    async fn update_status(
        &self,
        id: &SuggestionId,
        status: SuggestionStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ProblemSuggestion>> {
        self.check_error()?;
        let mut all = self.suggestions.lock().unwrap();
        Ok(all.iter_mut().find(|s| &s.id == id).map(|s| {
            s.status = status;
            s.updated_at = updated_at;
            s.clone()
        }))
    }

    async fn find_by_problem(&self, problem_id: &ProblemId) -> Result<Vec<ProblemSuggestion>> {
        self.check_error()?;
        let mut found: Vec<ProblemSuggestion> = self
            .suggestions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| &s.problem_id == problem_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }
}
