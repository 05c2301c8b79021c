// crates/problem/src/application/get_suggestions/get_suggestions_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProblemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSuggestionsCommand {
    pub problem_id: ProblemId,
}
