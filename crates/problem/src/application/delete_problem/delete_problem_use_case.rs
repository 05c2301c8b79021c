// crates/problem/src/application/delete_problem/delete_problem_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::Result;

use crate::application::delete_problem::DeleteProblemCommand;
use crate::domain::entities::Problem;
use crate::domain::repositories::ProblemRepository;

pub struct DeleteProblemUseCase {
    repo: Arc<dyn ProblemRepository>,
}

impl DeleteProblemUseCase {
    pub fn new(repo: Arc<dyn ProblemRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: DeleteProblemCommand) -> Result<()> {
        if !self.repo.delete(&cmd.problem_id).await? {
            return Err(Problem::not_found(cmd.problem_id));
        }

        tracing::info!(problem_id = %cmd.problem_id, "Problem deleted");
        Ok(())
    }
}
