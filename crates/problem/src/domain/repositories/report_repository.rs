// crates/problem/src/domain/repositories/report_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::Result;

use crate::domain::entities::ProblemReport;
use crate::domain::value_objects::{ReportId, ReportStatus};

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn insert(&self, report: &ProblemReport) -> Result<ProblemReport>;

    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ProblemReport>>;
}
