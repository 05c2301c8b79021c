// crates/problem/src/domain/repositories/author_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::AuthorSummary;

/// Lecture groupée des profils auteurs (id, username, avatar_url)
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Un seul aller-retour pour toutes les clés ; les ids inconnus sont absents du résultat
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<AuthorSummary>>;
}
