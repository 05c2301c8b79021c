// crates/problem/src/domain/repositories/bookmark_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::{Authored, ProblemBookmark, ProblemView};
use crate::domain::value_objects::ProblemId;

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Insertion idempotente : `true` si la ligne a été créée, `false` si elle existait
    async fn add(&self, bookmark: &ProblemBookmark) -> Result<bool>;

    /// Suppression idempotente : `true` si une ligne a été supprimée
    async fn remove(&self, user_id: &UserId, problem_id: &ProblemId) -> Result<bool>;

    async fn exists(&self, user_id: &UserId, problem_id: &ProblemId) -> Result<bool>;

    /// Problèmes mis en favori, avec auteur et catégorie, par date de favori décroissante.
    /// Les favoris dont le problème n'est plus visible sont ignorés.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Authored<ProblemView>>>;
}
