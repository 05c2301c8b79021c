// crates/shared-kernel/src/infrastructure/rest/rest_error.rs

use std::fmt;
use serde::Deserialize;
use thiserror::Error;

/// Corps d'erreur renvoyé par le backend (format PostgREST)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub hint: Option<serde_json::Value>,
}

impl RemoteErrorBody {
    /// Repli quand le corps n'est pas du JSON (proxy, page HTML, ...)
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            ..Default::default()
        }
    }

    /// Nom de contrainte extrait de `... violates unique constraint "xxx"`
    pub fn constraint(&self) -> Option<&str> {
        let start = self.message.find("constraint \"")? + "constraint \"".len();
        let rest = &self.message[start..];
        let end = rest.find('"')?;
        Some(&rest[..end])
    }
}

impl fmt::Display for RemoteErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Error)]
pub enum RestError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote error (HTTP {status}): {body}")]
    Api { status: u16, body: RemoteErrorBody },

    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Clé API ou jeton non transmissible dans un en-tête HTTP
    #[error("invalid {name} header value")]
    InvalidHeader { name: &'static str },
}
