// crates/problem/src/domain/entities/taxonomy.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{CategoryId, TagId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EntityMetadata for ProblemCategory {
    fn entity_name() -> &'static str {
        "ProblemCategory"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "problem_categories_name_key" => "name",
            _ => "unique_constraint",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemTag {
    pub id: TagId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl EntityMetadata for ProblemTag {
    fn entity_name() -> &'static str {
        "ProblemTag"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "problem_tag_relations_pkey" => "tag_id",
            "problem_tags_name_key" => "name",
            _ => "unique_constraint",
        }
    }
}
