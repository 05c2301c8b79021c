// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Ligne introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Conflit d'unicité (409)
            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => Self::new(
                ErrorCode::AlreadyExists,
                format!("{entity} with {field} '{value}' already exists"),
            ),

            // 3. Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 4. Identité (401 / 403)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),
            DomainError::Forbidden { reason } => Self::new(ErrorCode::Forbidden, reason),

            // 5. Backend injoignable : l'appelant peut réessayer
            DomainError::Infrastructure(reason) => {
                tracing::error!("Remote infrastructure error: {}", reason);
                Self::new(
                    ErrorCode::ServiceUnavailable,
                    "The service is temporarily unavailable. Please try again later.",
                )
            }

            // 6. Le détail technique reste dans les logs
            DomainError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_field_details() {
        let app: AppError = DomainError::Validation {
            field: "title",
            reason: "Title cannot be empty".into(),
        }
        .into();

        assert_eq!(app.code, ErrorCode::ValidationFailed);
        let details = app.details.unwrap();
        assert_eq!(details["field"], "title");
    }

    #[test]
    fn test_infrastructure_error_is_masked() {
        let app: AppError = DomainError::Infrastructure("connection reset by peer".into()).into();

        assert_eq!(app.code, ErrorCode::ServiceUnavailable);
        assert!(!app.message.contains("connection reset"));
    }
}
