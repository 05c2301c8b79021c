// crates/problem/src/application/update_report_status/update_report_status_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ReportId, ReportStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReportStatusCommand {
    pub report_id: ReportId,
    pub status: ReportStatus,
}
