// crates/problem/src/infrastructure/rest/rows/rest_author_row.rs

use serde::Deserialize;
use shared_kernel::domain::value_objects::UserId;
use uuid::Uuid;

use crate::domain::entities::AuthorSummary;

/// Projection `profiles(id, username, avatar_url)`
#[derive(Debug, Deserialize)]
pub struct RestAuthorRow {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<RestAuthorRow> for AuthorSummary {
    fn from(row: RestAuthorRow) -> Self {
        Self {
            id: UserId::new_unchecked(row.id),
            username: row.username,
            avatar_url: row.avatar_url.filter(|url| !url.is_empty()),
        }
    }
}
