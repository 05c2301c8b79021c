// crates/problem/src/application/get_problem_tags/get_problem_tags_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::get_problem_tags::GetProblemTagsCommand;
use crate::domain::entities::ProblemTag;
use crate::domain::repositories::TaxonomyRepository;

pub struct GetProblemTagsUseCase {
    repo: Arc<dyn TaxonomyRepository>,
}

impl GetProblemTagsUseCase {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: GetProblemTagsCommand) -> Result<Vec<ProblemTag>> {
        self.repo.tags_for_problem(&cmd.problem_id).await
    }
}
