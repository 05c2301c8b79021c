// crates/problem/src/application/create_report/create_report_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::{ProblemId, ReportReason};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportCommand {
    pub problem_id: ProblemId,
    pub reporter_id: UserId,
    pub reason: ReportReason,
}
