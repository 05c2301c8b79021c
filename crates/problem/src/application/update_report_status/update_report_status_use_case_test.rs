// crates/problem/src/application/update_report_status/update_report_status_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::clock::FixedClock;
    use shared_kernel::domain::value_objects::UserId;
    use shared_kernel::errors::DomainError;

    use crate::application::fixtures::t0;
    use crate::application::update_report_status::{UpdateReportStatusCommand, UpdateReportStatusUseCase};
    use crate::domain::entities::ProblemReport;
    use crate::domain::repositories::ReportRepositoryStub;
    use crate::domain::value_objects::{ProblemId, ReportId, ReportReason, ReportStatus};

    #[tokio::test]
    async fn test_resolve_report() {
        let report = ProblemReport::new(ProblemId::new(), UserId::new(), ReportReason::try_new("spam").unwrap(), t0());
        let id = report.id;
        let repo = Arc::new(ReportRepositoryStub::default());
        repo.reports.lock().unwrap().push(report);
        let use_case = UpdateReportStatusUseCase::new(repo, Arc::new(FixedClock::default()));

        let updated = use_case
            .execute(UpdateReportStatusCommand { report_id: id, status: ReportStatus::Resolved })
            .await
            .unwrap();

        assert_eq!(updated.status, ReportStatus::Resolved);
    }

    #[tokio::test]
    async fn test_unknown_report_is_not_found() {
        let use_case = UpdateReportStatusUseCase::new(
            Arc::new(ReportRepositoryStub::default()),
            Arc::new(FixedClock::default()),
        );

        let result = use_case
            .execute(UpdateReportStatusCommand { report_id: ReportId::new(), status: ReportStatus::Dismissed })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { entity: "ProblemReport", .. })));
    }
}
