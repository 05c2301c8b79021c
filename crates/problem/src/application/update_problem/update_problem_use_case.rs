// crates/problem/src/application/update_problem/update_problem_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::update_problem::UpdateProblemCommand;
use crate::domain::entities::{Problem, ProblemFilter};
use crate::domain::repositories::ProblemRepository;
use crate::domain::value_objects::{ProblemId, ProblemStatus};

pub struct UpdateProblemUseCase {
    repo: Arc<dyn ProblemRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateProblemUseCase {
    pub fn new(repo: Arc<dyn ProblemRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: UpdateProblemCommand) -> Result<Problem> {
        // solved_at n'est estampillé qu'à la transition vers `solved`
        let previous = match cmd.patch.status {
            Some(_) => Some(self.current_status(&cmd.problem_id).await?),
            None => None,
        };
        let update = cmd.patch.stamp(previous, self.clock.now());

        self.repo
            .update(&cmd.problem_id, &update)
            .await?
            .ok_or_not_found(cmd.problem_id)
    }

    async fn current_status(&self, id: &ProblemId) -> Result<ProblemStatus> {
        self.repo
            .find(&ProblemFilter::by_id(*id))
            .await?
            .into_iter()
            .next()
            .map(|view| view.problem)
            .ok_or_not_found(*id)
            .map(|problem| problem.status)
    }
}
