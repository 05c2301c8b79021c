// crates/problem/src/application/create_suggestion/create_suggestion_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::{ProblemId, SuggestionContent};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSuggestionCommand {
    pub problem_id: ProblemId,
    pub user_id: UserId,
    pub content: SuggestionContent,
}
