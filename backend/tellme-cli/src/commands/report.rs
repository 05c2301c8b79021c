// backend/tellme-cli/src/commands/report.rs

use std::sync::Arc;
use problem::application::create_report::{CreateReportCommand, CreateReportUseCase};
use problem::application::update_report_status::{UpdateReportStatusCommand, UpdateReportStatusUseCase};
use problem::domain::value_objects::ReportReason;
use problem::infrastructure::rest::repositories::RestReportRepository;
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::ReportCommand;
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: ReportCommand) -> anyhow::Result<()> {
    let repo = Arc::new(RestReportRepository::new(ctx));
    let clock = Arc::new(SystemClock);

    let report = match cmd {
        ReportCommand::Create { problem_id, reporter, reason } => {
            CreateReportUseCase::new(repo, clock)
                .execute(CreateReportCommand {
                    problem_id,
                    reporter_id: reporter,
                    reason: ReportReason::try_new(reason)?,
                })
                .await?
        }
        ReportCommand::Status { report_id, status } => {
            UpdateReportStatusUseCase::new(repo, clock)
                .execute(UpdateReportStatusCommand { report_id, status })
                .await?
        }
    };

    print_json(&report)
}
