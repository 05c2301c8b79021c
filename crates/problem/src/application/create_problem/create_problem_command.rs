// crates/problem/src/application/create_problem/create_problem_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::{CategoryId, Description, ProblemStatus, Title};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProblemCommand {
    pub user_id: UserId,
    pub title: Title,
    pub description: Description,
    pub category_id: Option<CategoryId>,
    pub status: ProblemStatus,
    pub is_public: bool,
}

impl CreateProblemCommand {
    /// Problème public, ouvert, sans catégorie
    pub fn new(user_id: UserId, title: Title, description: Description) -> Self {
        Self {
            user_id,
            title,
            description,
            category_id: None,
            status: ProblemStatus::Open,
            is_public: true,
        }
    }
}
