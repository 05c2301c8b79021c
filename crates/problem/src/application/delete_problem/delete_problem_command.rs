// crates/problem/src/application/delete_problem/delete_problem_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProblemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProblemCommand {
    pub problem_id: ProblemId,
}
