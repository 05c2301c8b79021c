// crates/problem/src/application/create_problem/create_problem_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::create_problem::CreateProblemCommand;
use crate::domain::entities::Problem;
use crate::domain::repositories::ProblemRepository;

pub struct CreateProblemUseCase {
    repo: Arc<dyn ProblemRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateProblemUseCase {
    pub fn new(repo: Arc<dyn ProblemRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: CreateProblemCommand) -> Result<Problem> {
        let problem = Problem::new(cmd.user_id, cmd.title, cmd.description, self.clock.now())
            .with_category(cmd.category_id)
            .with_status(cmd.status)
            .with_visibility(cmd.is_public);

        let created = self.repo.insert(&problem).await?;

        tracing::info!(problem_id = %created.id, user_id = %created.user_id, "Problem created");
        Ok(created)
    }
}
