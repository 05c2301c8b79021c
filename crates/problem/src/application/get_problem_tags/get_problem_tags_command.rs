// crates/problem/src/application/get_problem_tags/get_problem_tags_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProblemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProblemTagsCommand {
    pub problem_id: ProblemId,
}
