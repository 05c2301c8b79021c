// crates/problem/src/application/update_suggestion_status/update_suggestion_status_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SuggestionId, SuggestionStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSuggestionStatusCommand {
    pub suggestion_id: SuggestionId,
    pub status: SuggestionStatus,
}
