// crates/problem/src/application/author_join.rs

use shared_kernel::application::scatter_gather;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::{AuthorSummary, Authored, HasAuthor};
use crate::domain::repositories::AuthorRepository;

/// Attache à chaque élément le profil de son auteur : une seule lecture
/// groupée des profils, aucune si `items` est vide. Un profil manquant
/// donne `profiles: None`, jamais une erreur.
pub(crate) async fn attach_authors<T: HasAuthor>(
    items: Vec<T>,
    authors: &dyn AuthorRepository,
) -> Result<Vec<Authored<T>>> {
    let joined = scatter_gather(
        items,
        |item: &T| item.author_id(),
        |ids: Vec<UserId>| async move { authors.find_by_ids(&ids).await },
        |author: &AuthorSummary| author.id,
    )
    .await?;

    Ok(joined
        .into_iter()
        .map(|(item, profile)| {
            let user_id = item.author_id();
            if profile.is_none() {
                tracing::warn!(user_id = %user_id, "Author profile missing");
            }
            Authored::new(item, user_id, profile)
        })
        .collect())
}
