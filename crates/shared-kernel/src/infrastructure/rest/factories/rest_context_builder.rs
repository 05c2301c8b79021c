// crates/shared-kernel/src/infrastructure/rest/factories/rest_context_builder.rs

use std::sync::Arc;
use std::time::Duration;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::rest::factories::RestContext;
use crate::infrastructure::rest::session::{NoSession, SessionProvider};

pub const ENV_API_URL: &str = "TELLME_API_URL";
pub const ENV_API_KEY: &str = "TELLME_API_KEY";
pub const ENV_API_TIMEOUT_SECS: &str = "TELLME_API_TIMEOUT_SECS";

pub struct RestContextBuilder {
    pub(crate) url: String,
    pub(crate) api_key: String,
    pub(crate) timeout: Duration,
    pub(crate) session: Arc<dyn SessionProvider>,
}

impl Default for RestContextBuilder {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
            session: Arc::new(NoSession),
        }
    }
}

impl RestContextBuilder {
    /// Charge la config depuis l'environnement. Échoue immédiatement si
    /// l'URL ou la clé manquent : rien ne doit démarrer sans backend.
    pub fn new() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Même logique que `new`, avec une source de variables injectable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    AppError::new(ErrorCode::ConfigurationMissing, format!("{key} must be set"))
                })
        };

        let url = required(ENV_API_URL)?;
        let api_key = required(ENV_API_KEY)?;

        let timeout_secs = match lookup(ENV_API_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::new(
                    ErrorCode::ConfigurationMissing,
                    format!("{ENV_API_TIMEOUT_SECS} must be a number of seconds, got '{raw}'"),
                )
            })?,
            None => 10,
        };

        Ok(Self {
            url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            ..Default::default()
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = session;
        self
    }

    pub fn build(self) -> AppResult<RestContext> {
        RestContext::restore(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_url_fails_fast() {
        let err = RestContextBuilder::from_lookup(env(&[(ENV_API_KEY, "anon")])).err().unwrap();

        assert_eq!(err.code, ErrorCode::ConfigurationMissing);
        assert!(err.message.contains(ENV_API_URL));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let result = RestContextBuilder::from_lookup(env(&[
            (ENV_API_URL, "https://demo.example.co"),
            (ENV_API_KEY, "   "),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn test_timeout_is_parsed() {
        let builder = RestContextBuilder::from_lookup(env(&[
            (ENV_API_URL, "https://demo.example.co"),
            (ENV_API_KEY, "anon"),
            (ENV_API_TIMEOUT_SECS, "3"),
        ]))
        .unwrap();

        assert_eq!(builder.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = RestContextBuilder::from_lookup(env(&[
            (ENV_API_URL, "https://demo.example.co"),
            (ENV_API_KEY, "anon"),
            (ENV_API_TIMEOUT_SECS, "soon"),
        ]));

        assert!(result.is_err());
    }
}
