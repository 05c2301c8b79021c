// crates/problem/src/infrastructure/rest/rows/rest_bookmark_row.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::infrastructure::rest::rows::RestProblemRow;

/// Ligne `problem_bookmarks` avec le problème embarqué.
/// `problems` est nul quand la ligne n'est plus visible (supprimée ou privée).
#[derive(Debug, Deserialize)]
pub struct RestBookmarkedProblemRow {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub problems: Option<RestProblemRow>,
}
