// crates/shared-kernel/src/domain/value_objects/username.rs

use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_objects::{UserId, ValueObject};
use crate::errors::{DomainError, Result};

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._]*[a-z0-9]$").expect("username regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 30;
    pub const PLACEHOLDER_PREFIX: &'static str = "user_";

    /// Constructeur sécurisé (API / Domaine)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // 1. Normalisation (NFC + Lowercase + Trim)
        let normalized: String = raw.trim().nfc().collect::<String>().to_lowercase();

        let username = Self(normalized);

        // 2. Validation
        username.validate()?;

        Ok(username)
    }

    /// Pseudo provisoire attribué à la création paresseuse d'un profil.
    pub fn placeholder_for(user_id: &UserId) -> Self {
        Self(format!("{}{}", Self::PLACEHOLDER_PREFIX, user_id.short()))
    }

    /// Variante longue, utilisée quand la forme courte est déjà prise :
    /// autant de chiffres hexadécimaux que `MAX_LEN` le permet.
    pub fn extended_placeholder_for(user_id: &UserId) -> Self {
        let digits = Self::MAX_LEN - Self::PLACEHOLDER_PREFIX.len();
        Self(format!("{}{}", Self::PLACEHOLDER_PREFIX, user_id.hex_prefix(digits)))
    }

    /// Reconstruction (Infrastructure / DB), sans revalidation
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.starts_with(Self::PLACEHOLDER_PREFIX)
    }
}

impl ValueObject for Username {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();

        // 1. Longueur
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(DomainError::Validation {
                field: "username",
                reason: format!(
                    "Username must be between {} and {} characters",
                    Self::MIN_LEN,
                    Self::MAX_LEN
                ),
            });
        }

        // 2. Format Regex
        if !USERNAME_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "username",
                reason: "Invalid format: only lowercase, numbers, dots or underscores allowed. Cannot start/end with special chars.".into(),
            });
        }

        // 3. Séquences spéciales consécutives
        if self.0.contains("..") || self.0.contains("__") || self.0.contains("._") || self.0.contains("_.") {
            return Err(DomainError::Validation {
                field: "username",
                reason: "Username cannot contain consecutive special characters".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Username {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
