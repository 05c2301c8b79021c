// crates/problem/src/domain/entities/report.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::{ProblemId, ReportId, ReportReason, ReportStatus};

/// Signalement d'un problème par un utilisateur
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemReport {
    pub id: ReportId,
    pub problem_id: ProblemId,
    pub reporter_id: UserId,
    pub reason: ReportReason,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemReport {
    pub fn new(problem_id: ProblemId, reporter_id: UserId, reason: ReportReason, now: DateTime<Utc>) -> Self {
        Self {
            id: ReportId::new(),
            problem_id,
            reporter_id,
            reason,
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

impl EntityMetadata for ProblemReport {
    fn entity_name() -> &'static str {
        "ProblemReport"
    }
}
