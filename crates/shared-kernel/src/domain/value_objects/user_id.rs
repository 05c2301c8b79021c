// crates/shared-kernel/src/domain/value_objects/user_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use crate::domain::entities::EntityMetadata;
use crate::domain::value_objects::ValueObject;
use crate::domain::Identifier;
use crate::errors::{DomainError, Result};

/// Identifiant d'un utilisateur authentifié.
/// C'est le `sub` de la session BaaS, et aussi la clé primaire de `profiles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reconstruction depuis un type sûr (Interne/DB)
    pub fn new_unchecked(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Validation et création depuis une String (API/Entrée externe)
    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let s = id.into();
        let id = Self::from_str(&s)?;
        id.validate()?;
        Ok(id)
    }

    /// Les 8 premiers caractères hexadécimaux, utilisés pour le pseudo provisoire.
    pub fn short(&self) -> String {
        self.hex_prefix(8)
    }

    /// Les `len` premiers caractères hexadécimaux (32 au plus)
    pub fn hex_prefix(&self, len: usize) -> String {
        let hex = self.0.simple().to_string();
        hex[..len.min(hex.len())].to_string()
    }
}

impl Identifier for UserId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: "User ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for UserId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "user_id",
                reason: format!("'{}' is not a valid UUID", s),
            })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityMetadata for UserId {
    fn entity_name() -> &'static str {
        "User"
    }
}
