// crates/problem/src/application/get_problems/get_problems_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::entities::ProblemFilter;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetProblemsCommand {
    pub filter: ProblemFilter,
}
