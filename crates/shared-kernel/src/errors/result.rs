// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE
/// Utilisé par : Use Cases, Repositories (Ports), Value Objects.
/// Toute erreur distante est traduite en DomainError avant de remonter.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION
/// Utilisé par : configuration, CLI.
pub type AppResult<T> = std::result::Result<T, AppError>;

