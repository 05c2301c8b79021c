// crates/profile/src/domain/value_objects/bio.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{normalize_text, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Bio(String);

impl Bio {
    pub const MAX_LENGTH: usize = 500;

    /// Constructeur sécurisé (mise à jour du profil).
    /// Une bio vide n'est pas une bio : utiliser `None` pour l'effacer.
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let normalized = normalize_text("bio", &value.into(), Self::MAX_LENGTH)?;
        let bio = Self(normalized);
        bio.validate()?;
        Ok(bio)
    }

    /// Reconstruction depuis le backend, sans validation
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Bio {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();
        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "bio",
                reason: format!("Bio is too long (max {} chars, got {})", Self::MAX_LENGTH, count),
            });
        }
        Ok(())
    }
}

impl From<Bio> for String {
    fn from(bio: Bio) -> Self {
        bio.0
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
