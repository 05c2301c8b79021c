// crates/problem/src/application/update_report_status/update_report_status_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::update_report_status::UpdateReportStatusCommand;
use crate::domain::entities::ProblemReport;
use crate::domain::repositories::ReportRepository;

pub struct UpdateReportStatusUseCase {
    repo: Arc<dyn ReportRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateReportStatusUseCase {
    pub fn new(repo: Arc<dyn ReportRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, cmd: UpdateReportStatusCommand) -> Result<ProblemReport> {
        let updated = self
            .repo
            .update_status(&cmd.report_id, cmd.status, self.clock.now())
            .await?
            .ok_or_not_found(cmd.report_id)?;

        tracing::info!(report_id = %updated.id, status = %updated.status, "Report status updated");
        Ok(updated)
    }
}
