// crates/problem/src/infrastructure/rest/rows/rest_status_update.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Corps des mises à jour de statut (suggestions, signalements)
#[derive(Debug, Serialize)]
pub struct RestStatusUpdate<S: Serialize> {
    pub status: S,
    pub updated_at: DateTime<Utc>,
}
