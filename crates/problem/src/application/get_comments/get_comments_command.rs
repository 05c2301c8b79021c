// crates/problem/src/application/get_comments/get_comments_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProblemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommentsCommand {
    pub problem_id: ProblemId,
}
