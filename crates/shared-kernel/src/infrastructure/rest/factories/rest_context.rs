// crates/shared-kernel/src/infrastructure/rest/factories/rest_context.rs

use std::sync::Arc;
use std::time::Duration;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::rest::factories::{RestConfig, RestContextBuilder};
use crate::infrastructure::rest::session::SessionProvider;
use crate::infrastructure::rest::RestQuery;

/// Client du backend : endpoint, clé API, session et client HTTP partagé.
/// Le clone est peu coûteux (le `reqwest::Client` est un Arc en interne).
#[derive(Clone)]
pub struct RestContext {
    client: reqwest::Client,
    url: String,
    api_key: String,
    timeout: Duration,
    session: Arc<dyn SessionProvider>,
}

impl RestContext {
    pub fn builder() -> AppResult<RestContextBuilder> {
        RestContextBuilder::new()
    }

    pub fn builder_raw() -> RestContextBuilder {
        RestContextBuilder::default()
    }

    /// Point d'entrée du query builder : `ctx.from("problems")`
    pub fn from(&self, table: &'static str) -> RestQuery<'_> {
        RestQuery::new(self, table)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn session(&self) -> &dyn SessionProvider {
        self.session.as_ref()
    }

    pub fn config(&self) -> RestConfig {
        RestConfig::new(self.url.clone(), self.timeout)
    }

    pub(crate) fn restore(builder: RestContextBuilder) -> AppResult<Self> {
        let url = builder.url.trim().trim_end_matches('/').to_string();

        let parsed = url::Url::parse(&url).map_err(|e| {
            AppError::new(ErrorCode::ConfigurationMissing, format!("Invalid API URL '{url}': {e}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::new(
                ErrorCode::ConfigurationMissing,
                format!("API URL must use http or https, got '{}'", parsed.scheme()),
            ));
        }

        if builder.api_key.trim().is_empty() {
            return Err(AppError::new(ErrorCode::ConfigurationMissing, "API key must be set"));
        }
        if reqwest::header::HeaderValue::from_str(&builder.api_key).is_err() {
            return Err(AppError::new(
                ErrorCode::ConfigurationMissing,
                "API key contains characters not allowed in an HTTP header",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(builder.timeout)
            .build()
            .map_err(|e| {
                AppError::new(ErrorCode::InternalError, format!("HTTP client init failed: {e}"))
            })?;

        tracing::debug!(url = %url, timeout = ?builder.timeout, "REST context ready");

        Ok(Self {
            client,
            url,
            api_key: builder.api_key,
            timeout: builder.timeout,
            session: builder.session,
        })
    }
}
