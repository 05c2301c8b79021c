// crates/problem/src/application/add_bookmark/add_bookmark_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::ProblemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBookmarkCommand {
    pub user_id: UserId,
    pub problem_id: ProblemId,
}
