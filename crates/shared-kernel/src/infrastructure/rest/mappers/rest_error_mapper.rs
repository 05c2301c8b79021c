// crates/shared-kernel/src/infrastructure/rest/mappers/rest_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;
use crate::infrastructure::rest::{RemoteErrorBody, RestError};

pub trait RestErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
}

impl<T> RestErrorExt<T> for std::result::Result<T, RestError> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(to_domain_error::<E>)
    }
}

/// Traduit une erreur du backend dans la taxonomie du domaine.
pub fn to_domain_error<E: EntityMetadata>(err: RestError) -> DomainError {
    match err {
        RestError::Transport(e) => {
            if e.is_timeout() {
                DomainError::Infrastructure(format!("{} request timed out", E::entity_name()))
            } else if e.is_decode() {
                DomainError::Internal(format!("Failed to decode {}: {}", E::entity_name(), e))
            } else {
                DomainError::Infrastructure(e.to_string())
            }
        }
        RestError::Payload(e) => {
            DomainError::Internal(format!("Failed to decode {}: {}", E::entity_name(), e))
        }
        RestError::Api { status, body } => map_api_error::<E>(status, body),
        RestError::InvalidHeader { name } => DomainError::Unauthorized {
            reason: format!("credentials unusable as {name} header"),
        },
    }
}

fn map_api_error<E: EntityMetadata>(status: u16, body: RemoteErrorBody) -> DomainError {
    // 1. Codes applicatifs (PostgREST / Postgres) : plus précis que le statut HTTP
    match body.code.as_deref() {
        // Objet unique demandé, 0 ligne
        Some("PGRST116") => {
            return DomainError::NotFound {
                entity: E::entity_name(),
                id: "unknown".into(),
            }
        }
        // Violation d'unicité
        Some("23505") => {
            let field = body
                .constraint()
                .map(E::map_constraint_to_field)
                .unwrap_or("unique_constraint");
            return DomainError::AlreadyExists {
                entity: E::entity_name(),
                field,
                value: "already taken".into(),
            };
        }
        // Clé étrangère vers une ligne inexistante
        Some("23503") => {
            return DomainError::Validation {
                field: "reference",
                reason: body.message,
            }
        }
        // NOT NULL, CHECK, format invalide, valeur trop longue
        Some("23502") | Some("23514") | Some("22P02") | Some("22001") => {
            return DomainError::Validation {
                field: "payload",
                reason: body.message,
            }
        }
        // Row Level Security
        Some("42501") => return DomainError::Forbidden { reason: body.message },
        // Jetons JWT invalides ou expirés
        Some(code) if code.starts_with("PGRST30") => {
            return DomainError::Unauthorized { reason: body.message }
        }
        _ => {}
    }

    // 2. Repli sur le statut HTTP
    match status {
        401 => DomainError::Unauthorized { reason: body.message },
        403 => DomainError::Forbidden { reason: body.message },
        409 => DomainError::AlreadyExists {
            entity: E::entity_name(),
            field: "unique_constraint",
            value: "already taken".into(),
        },
        400 | 422 => DomainError::Validation {
            field: "request",
            reason: body.to_string(),
        },
        408 | 429 | 500..=599 => DomainError::Infrastructure(format!("HTTP {status}: {body}")),
        _ => DomainError::Internal(format!("Unexpected HTTP {status} on {}: {body}", E::entity_name())),
    }
}
