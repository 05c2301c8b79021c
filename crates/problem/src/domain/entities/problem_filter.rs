// crates/problem/src/domain/entities/problem_filter.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::infrastructure::pagination::PageRequest;

use crate::domain::entities::Problem;
use crate::domain::value_objects::{CategoryId, ProblemId, ProblemStatus};

/// Critères du fil. Avec `problem_id`, tous les autres critères
/// (pagination comprise) sont ignorés.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemFilter {
    pub user_id: Option<UserId>,
    pub category_id: Option<CategoryId>,
    pub status: Option<ProblemStatus>,
    pub is_public: Option<bool>,
    pub problem_id: Option<ProblemId>,
    #[serde(default)]
    pub page: PageRequest,
}

impl ProblemFilter {
    pub fn by_id(problem_id: ProblemId) -> Self {
        Self {
            problem_id: Some(problem_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, problem: &Problem) -> bool {
        if let Some(id) = self.problem_id {
            return problem.id == id;
        }
        self.user_id.map_or(true, |u| problem.user_id == u)
            && self.category_id.map_or(true, |c| problem.category_id == Some(c))
            && self.status.map_or(true, |s| problem.status == s)
            && self.is_public.map_or(true, |p| problem.is_public == p)
    }

    /// Pagination effective (aucune quand on cible un id)
    pub fn effective_page(&self) -> PageRequest {
        match self.problem_id {
            Some(_) => PageRequest::default(),
            None => self.page,
        }
    }
}
