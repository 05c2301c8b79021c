// crates/problem/src/domain/repositories/problem_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::{Problem, ProblemFilter, ProblemUpdate, ProblemView};
use crate::domain::value_objects::ProblemId;

#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Lignes correspondant au filtre, avec le nom de catégorie, par created_at décroissant
    async fn find(&self, filter: &ProblemFilter) -> Result<Vec<ProblemView>>;

    async fn insert(&self, problem: &Problem) -> Result<Problem>;

    /// `Ok(None)` si aucune ligne ne correspond
    async fn update(&self, id: &ProblemId, update: &ProblemUpdate) -> Result<Option<Problem>>;

    /// `true` si une ligne a été supprimée
    async fn delete(&self, id: &ProblemId) -> Result<bool>;
}
