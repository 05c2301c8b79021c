// crates/problem/src/application/get_categories/get_categories_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::domain::entities::ProblemCategory;
use crate::domain::repositories::TaxonomyRepository;

pub struct GetCategoriesUseCase {
    repo: Arc<dyn TaxonomyRepository>,
}

impl GetCategoriesUseCase {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    /// Toutes les catégories, par nom croissant
    pub async fn execute(&self) -> Result<Vec<ProblemCategory>> {
        self.repo.categories().await
    }
}
