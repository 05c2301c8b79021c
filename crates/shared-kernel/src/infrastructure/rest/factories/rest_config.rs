// crates/shared-kernel/src/infrastructure/rest/factories/rest_config.rs

use std::time::Duration;

/// Vue publique (sans secret) de la configuration d'un RestContext
#[derive(Debug, Clone, PartialEq)]
pub struct RestConfig {
    pub url: String,
    pub timeout: Duration,
}

impl RestConfig {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}
