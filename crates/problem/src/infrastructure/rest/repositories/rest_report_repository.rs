// crates/problem/src/infrastructure/rest/repositories/rest_report_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::ProblemReport;
use crate::domain::repositories::ReportRepository;
use crate::domain::value_objects::{ReportId, ReportStatus};
use crate::infrastructure::rest::rows::RestStatusUpdate;
use crate::infrastructure::rest::REPORTS_TABLE;

pub struct RestReportRepository {
    ctx: RestContext,
}

impl RestReportRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ReportRepository for RestReportRepository {
    async fn insert(&self, report: &ProblemReport) -> Result<ProblemReport> {
        let rows = self
            .ctx
            .from(REPORTS_TABLE)
            .insert::<_, ProblemReport>(report)
            .await
            .map_domain::<ProblemReport>()?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::Internal("Report insert returned no row".into()))
    }

    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ProblemReport>> {
        let rows = self
            .ctx
            .from(REPORTS_TABLE)
            .eq("id", id)
            .update::<_, ProblemReport>(&RestStatusUpdate { status, updated_at })
            .await
            .map_domain::<ProblemReport>()?;

        Ok(rows.into_iter().next())
    }
}
