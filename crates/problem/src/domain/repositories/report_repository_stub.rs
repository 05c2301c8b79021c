// crates/problem/src/domain/repositories/report_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::ProblemReport;
use crate::domain::repositories::ReportRepository;
use crate::domain::value_objects::{ReportId, ReportStatus};

#[derive(Default)]
pub struct ReportRepositoryStub {
    pub reports: Mutex<Vec<ProblemReport>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

#[async_trait]
impl ReportRepository for ReportRepositoryStub {
    async fn insert(&self, report: &ProblemReport) -> Result<ProblemReport> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.reports.lock().unwrap().push(report.clone());
        Ok(report.clone())
    }

    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ProblemReport>> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let mut all = self.reports.lock().unwrap();
        Ok(all.iter_mut().find(|r| &r.id == id).map(|r| {
            r.status = status;
            r.updated_at = updated_at;
            r.clone()
        }))
    }
}
