// crates/problem/src/domain/entities/problem_view.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::{HasAuthor, Problem};

/// Problème tel qu'affiché dans le fil : la ligne plus le nom de sa catégorie
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemView {
    #[serde(flatten)]
    pub problem: Problem,
    pub category_name: Option<String>,
}

impl ProblemView {
    pub fn new(problem: Problem, category_name: Option<String>) -> Self {
        Self { problem, category_name }
    }
}

impl HasAuthor for ProblemView {
    fn author_id(&self) -> UserId {
        self.problem.user_id
    }
}
