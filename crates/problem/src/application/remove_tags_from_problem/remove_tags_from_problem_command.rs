// crates/problem/src/application/remove_tags_from_problem/remove_tags_from_problem_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProblemId, TagId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTagsFromProblemCommand {
    pub problem_id: ProblemId,
    pub tag_ids: Vec<TagId>,
}
