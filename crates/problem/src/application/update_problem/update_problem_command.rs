// crates/problem/src/application/update_problem/update_problem_command.rs

use crate::domain::entities::ProblemPatch;
use crate::domain::value_objects::ProblemId;

#[derive(Debug, Clone)]
pub struct UpdateProblemCommand {
    pub problem_id: ProblemId,
    pub patch: ProblemPatch,
}
