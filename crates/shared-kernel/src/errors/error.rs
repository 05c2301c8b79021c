// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Violation d'unicité (ex: username déjà pris, favori en double)
    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Identité absente ou invalide (clé API / session)
    #[error("Unauthorized access: {reason}")]
    Unauthorized {
        reason: String,
    },

    /// Refus du backend malgré une identité valide (row level security)
    #[error("Forbidden: {reason}")]
    Forbidden {
        reason: String,
    },

    /// Échec transitoire : réseau, timeout, service distant indisponible
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    /// Réponse illisible ou erreur de programmation
    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Seule catégorie qui justifie de rejouer la requête côté appelant
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Infrastructure(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            crate::errors::ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into(),
            },
            crate::errors::ErrorCode::ServiceUnavailable
            | crate::errors::ErrorCode::InfrastructureFailure => {
                DomainError::Infrastructure(err.message)
            }
            _ => DomainError::Internal(err.message),
        }
    }
}
