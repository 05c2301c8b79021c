// crates/problem/src/domain/entities/author.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

/// Projection publique d'un profil, jointe aux contenus
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

impl EntityMetadata for AuthorSummary {
    fn entity_name() -> &'static str {
        "Profile"
    }
}

/// Référence à l'auteur : son id est toujours connu, son profil peut manquer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthorRef {
    pub id: UserId,
    pub profiles: Option<AuthorSummary>,
}

/// Contenu accompagné de son auteur
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Authored<T> {
    #[serde(flatten)]
    pub item: T,
    pub user: AuthorRef,
}

impl<T> Authored<T> {
    pub fn new(item: T, user_id: UserId, profile: Option<AuthorSummary>) -> Self {
        Self {
            item,
            user: AuthorRef {
                id: user_id,
                profiles: profile,
            },
        }
    }

    pub fn author(&self) -> Option<&AuthorSummary> {
        self.user.profiles.as_ref()
    }
}

/// Contenus rattachés à un auteur
pub trait HasAuthor {
    fn author_id(&self) -> UserId;
}
