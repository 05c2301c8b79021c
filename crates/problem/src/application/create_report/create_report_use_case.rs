// crates/problem/src/application/create_report/create_report_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::create_report::CreateReportCommand;
use crate::domain::entities::ProblemReport;
use crate::domain::repositories::ReportRepository;

pub struct CreateReportUseCase {
    repo: Arc<dyn ReportRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateReportUseCase {
    pub fn new(repo: Arc<dyn ReportRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: CreateReportCommand) -> Result<ProblemReport> {
        let report = ProblemReport::new(cmd.problem_id, cmd.reporter_id, cmd.reason, self.clock.now());
        let created = self.repo.insert(&report).await?;

        tracing::warn!(report_id = %created.id, problem_id = %created.problem_id, "Problem reported");
        Ok(created)
    }
}
