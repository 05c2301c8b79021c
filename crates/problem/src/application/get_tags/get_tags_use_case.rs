// crates/problem/src/application/get_tags/get_tags_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::domain::entities::ProblemTag;
use crate::domain::repositories::TaxonomyRepository;

pub struct GetTagsUseCase {
    repo: Arc<dyn TaxonomyRepository>,
}

impl GetTagsUseCase {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<ProblemTag>> {
        self.repo.tags().await
    }
}
