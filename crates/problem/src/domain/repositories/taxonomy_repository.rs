// crates/problem/src/domain/repositories/taxonomy_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::{ProblemCategory, ProblemTag};
use crate::domain::value_objects::{ProblemId, TagId};

/// Catégories, tags et table de liaison problème <-> tag
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn categories(&self) -> Result<Vec<ProblemCategory>>;

    async fn tags(&self) -> Result<Vec<ProblemTag>>;

    /// Tags d'un problème, par nom croissant
    async fn tags_for_problem(&self, problem_id: &ProblemId) -> Result<Vec<ProblemTag>>;

    /// Insertion groupée ; `tag_ids` est non vide et sans doublon
    async fn attach_tags(&self, problem_id: &ProblemId, tag_ids: &[TagId]) -> Result<()>;

    /// Suppression groupée ; `tag_ids` est non vide et sans doublon
    async fn detach_tags(&self, problem_id: &ProblemId, tag_ids: &[TagId]) -> Result<()>;
}
