// crates/problem/src/infrastructure/rest/rows/rest_tag_relation_row.rs

use serde::{Deserialize, Serialize};

use crate::domain::entities::ProblemTag;
use crate::domain::value_objects::{ProblemId, TagId};

/// Corps d'insertion dans `problem_tag_relations`
#[derive(Debug, Serialize)]
pub struct RestTagRelation {
    pub problem_id: ProblemId,
    pub tag_id: TagId,
}

/// `problem_tag_relations` avec `problem_tags:tag_id(*)` embarqué
#[derive(Debug, Deserialize)]
pub struct RestTagRelationRow {
    #[serde(default)]
    pub problem_tags: Option<ProblemTag>,
}
