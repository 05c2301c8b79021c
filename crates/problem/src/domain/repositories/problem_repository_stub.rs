// crates/problem/src/domain/repositories/problem_repository_stub.rs

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Problem, ProblemFilter, ProblemUpdate, ProblemView};
use crate::domain::repositories::ProblemRepository;
use crate::domain::value_objects::{CategoryId, ProblemId};

#[derive(Default)]
pub struct ProblemRepositoryStub {
    pub problems: Mutex<Vec<Problem>>,
    pub category_names: Mutex<HashMap<CategoryId, String>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub last_filter: Mutex<Option<ProblemFilter>>,
}

impl ProblemRepositoryStub {
    pub fn with_problems(problems: Vec<Problem>) -> Self {
        let stub = Self::default();
        *stub.problems.lock().unwrap() = problems;
        stub
    }

    pub fn with_category(self, id: CategoryId, name: &str) -> Self {
        self.category_names.lock().unwrap().insert(id, name.to_string());
        self
    }

    pub fn stored(&self, id: &ProblemId) -> Option<Problem> {
        self.problems.lock().unwrap().iter().find(|p| &p.id == id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProblemRepository for ProblemRepositoryStub {
    async fn find(&self, filter: &ProblemFilter) -> Result<Vec<ProblemView>> {
        self.check_error()?;
        *self.last_filter.lock().unwrap() = Some(filter.clone());

        let names = self.category_names.lock().unwrap();
        let mut matching: Vec<Problem> = self
            .problems
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(filter
            .effective_page()
            .slice(matching)
            .into_iter()
            .map(|p| {
                let category = p.category_id.and_then(|c| names.get(&c).cloned());
                ProblemView::new(p, category)
            })
            .collect())
    }

    async fn insert(&self, problem: &Problem) -> Result<Problem> {
        self.check_error()?;
        self.problems.lock().unwrap().push(problem.clone());
        Ok(problem.clone())
    }

    async fn update(&self, id: &ProblemId, update: &ProblemUpdate) -> Result<Option<Problem>> {
        self.check_error()?;
        let mut problems = self.problems.lock().unwrap();
        Ok(problems.iter_mut().find(|p| &p.id == id).map(|p| {
            p.apply(update);
            p.clone()
        }))
    }

    async fn delete(&self, id: &ProblemId) -> Result<bool> {
        self.check_error()?;
        let mut problems = self.problems.lock().unwrap();
        let before = problems.len();
        problems.retain(|p| &p.id != id);
        Ok(problems.len() < before)
    }
}
