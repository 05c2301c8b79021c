// crates/problem/src/application/add_tags_to_problem/add_tags_to_problem_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProblemId, TagId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTagsToProblemCommand {
    pub problem_id: ProblemId,
    pub tag_ids: Vec<TagId>,
}
