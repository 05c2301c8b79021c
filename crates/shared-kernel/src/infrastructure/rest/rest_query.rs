// crates/shared-kernel/src/infrastructure/rest/rest_query.rs

use std::fmt::Display;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::infrastructure::pagination::PageRequest;
use crate::infrastructure::rest::{RemoteErrorBody, RestContext, RestError};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";
const RETURN_MINIMAL: &str = "return=minimal";
const IGNORE_DUPLICATES: &str = "resolution=ignore-duplicates,return=representation";

/// Requête sur une table du backend, construite à la manière du client JS :
/// `ctx.from("problems").select("*").eq("status", "open").order("created_at", false)`.
///
/// Les filtres sont traduits en paramètres PostgREST (`col=eq.val`, `col=in.(a,b)`).
pub struct RestQuery<'a> {
    ctx: &'a RestContext,
    table: &'static str,
    params: Vec<(String, String)>,
    orders: Vec<String>,
}

impl<'a> RestQuery<'a> {
    pub(crate) fn new(ctx: &'a RestContext, table: &'static str) -> Self {
        Self {
            ctx,
            table,
            params: Vec::new(),
            orders: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        // Les espaces/retours à la ligne des sélections multi-lignes sont ignorés par le backend
        let compact: String = columns.split_whitespace().collect();
        self.params.push(("select".into(), compact));
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.into(), format!("eq.{value}")));
        self
    }

    pub fn is_in<I>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let list = values
            .into_iter()
            .map(|v| quote_list_value(&v.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        self.params.push((column.into(), format!("in.({list})")));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.orders.push(format!("{column}.{direction}"));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".into(), limit.to_string()));
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.params.push(("offset".into(), offset.to_string()));
        self
    }

    pub fn page(self, page: &PageRequest) -> Self {
        let (limit, offset) = page.window();
        let query = match limit {
            Some(limit) => self.limit(limit),
            None => self,
        };
        match offset {
            Some(offset) => query.offset(offset),
            None => query,
        }
    }

    pub fn on_conflict(mut self, columns: &str) -> Self {
        self.params.push(("on_conflict".into(), columns.into()));
        self
    }

    /// Paramètres de requête tels qu'ils seront envoyés
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.params.clone();
        if !self.orders.is_empty() {
            pairs.push(("order".into(), self.orders.join(",")));
        }
        pairs
    }

    // --- Terminaux ---

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RestError> {
        let bytes = self.dispatch(Method::GET, None, None, false).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Exactement une ligne ; 0 ligne remonte en erreur PGRST116 (NotFound).
    pub async fn fetch_single<T: DeserializeOwned>(self) -> Result<T, RestError> {
        let bytes = self.dispatch(Method::GET, None, None, true).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Au plus une ligne, sans faire de l'absence une erreur.
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>, RestError> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }

    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_value(body)?;
        let bytes = self
            .dispatch(Method::POST, Some(payload), Some(RETURN_REPRESENTATION), false)
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Insertion sans relecture (table de liaison, pas de colonne à renvoyer)
    pub async fn insert_minimal<B>(self, body: &B) -> Result<(), RestError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(body)?;
        self.dispatch(Method::POST, Some(payload), Some(RETURN_MINIMAL), false)
            .await?;
        Ok(())
    }

    /// `INSERT ... ON CONFLICT DO NOTHING RETURNING *` : ne renvoie que les lignes
    /// réellement créées. À combiner avec `on_conflict(...)`.
    pub async fn upsert_ignore_duplicates<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_value(body)?;
        let bytes = self
            .dispatch(Method::POST, Some(payload), Some(IGNORE_DUPLICATES), false)
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_value(body)?;
        let bytes = self
            .dispatch(Method::PATCH, Some(payload), Some(RETURN_REPRESENTATION), false)
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Supprime et renvoie les lignes supprimées (vide = rien ne correspondait)
    pub async fn delete<T: DeserializeOwned>(self) -> Result<Vec<T>, RestError> {
        let bytes = self
            .dispatch(Method::DELETE, None, Some(RETURN_REPRESENTATION), false)
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn dispatch(
        self,
        method: Method,
        body: Option<serde_json::Value>,
        prefer: Option<&'static str>,
        single: bool,
    ) -> Result<Vec<u8>, RestError> {
        let url = self.ctx.table_url(self.table);
        let pairs = self.query_pairs();

        tracing::debug!(method = %method, table = self.table, params = ?pairs, "Remote request");

        let mut request = self
            .ctx
            .client()
            .request(method, url)
            .headers(self.headers(prefer, single).await?)
            .query(&pairs);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?.to_vec();

        if !status.is_success() {
            let body = serde_json::from_slice::<RemoteErrorBody>(&bytes)
                .unwrap_or_else(|_| RemoteErrorBody::from_text(String::from_utf8_lossy(&bytes)));
            tracing::debug!(status = status.as_u16(), table = self.table, error = %body, "Remote request failed");
            return Err(RestError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(bytes)
    }

    async fn headers(
        &self,
        prefer: Option<&'static str>,
        single: bool,
    ) -> Result<HeaderMap, RestError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(self.ctx.api_key())
            .map_err(|_| RestError::InvalidHeader { name: "apikey" })?;
        headers.insert("apikey", api_key);

        // Jeton de session si présent, sinon la clé anonyme
        let bearer = match self.ctx.session().access_token().await {
            Some(token) => token,
            None => self.ctx.api_key().to_string(),
        };
        let authorization = HeaderValue::from_str(&format!("Bearer {bearer}"))
            .map_err(|_| RestError::InvalidHeader { name: "authorization" })?;
        headers.insert(AUTHORIZATION, authorization);

        if single {
            headers.insert(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT));
        }
        if let Some(prefer) = prefer {
            headers.insert("prefer", HeaderValue::from_static(prefer));
        }

        Ok(headers)
    }
}

/// Les valeurs contenant des séparateurs PostgREST doivent être entre guillemets
fn quote_list_value(value: &str) -> String {
    if value.contains([',', '(', ')', '"', ' ']) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::rest::MemorySessionStore;

    fn ctx() -> RestContext {
        RestContext::builder_raw()
            .with_url("https://demo.example.co")
            .with_api_key("anon")
            .build()
            .unwrap()
    }

    fn param<'p>(pairs: &'p [(String, String)], key: &str) -> Option<&'p str> {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_filters_and_order_are_encoded() {
        let ctx = ctx();
        let pairs = ctx
            .from("problems")
            .select("*, categories:category_id (name)")
            .eq("status", "solved")
            .eq("is_public", true)
            .order("created_at", false)
            .query_pairs();

        assert_eq!(param(&pairs, "select"), Some("*,categories:category_id(name)"));
        assert_eq!(param(&pairs, "status"), Some("eq.solved"));
        assert_eq!(param(&pairs, "is_public"), Some("eq.true"));
        assert_eq!(param(&pairs, "order"), Some("created_at.desc"));
    }

    #[test]
    fn test_in_filter_quotes_reserved_characters() {
        let ctx = ctx();
        let pairs = ctx
            .from("problem_tags")
            .is_in("name", ["rust", "a,b", "x y"])
            .query_pairs();

        assert_eq!(param(&pairs, "name"), Some("in.(rust,\"a,b\",\"x y\")"));
    }

    #[test]
    fn test_page_applies_window() {
        let ctx = ctx();
        let pairs = ctx
            .from("problems")
            .page(&PageRequest::new(None, Some(30)))
            .query_pairs();

        assert_eq!(param(&pairs, "limit"), Some("10"));
        assert_eq!(param(&pairs, "offset"), Some("30"));
    }

    #[tokio::test]
    async fn test_malformed_session_token_is_rejected_before_sending() {
        let ctx = RestContext::builder_raw()
            .with_url("https://demo.example.co")
            .with_api_key("anon")
            .with_session(std::sync::Arc::new(MemorySessionStore::with_token("jwt\nX-Injected: 1")))
            .build()
            .unwrap();

        let result = ctx.from("problems").headers(None, false).await;

        assert!(matches!(result, Err(RestError::InvalidHeader { name: "authorization" })));
    }

    #[tokio::test]
    async fn test_headers_carry_key_and_bearer() {
        let ctx = ctx();

        let headers = ctx.from("problems").headers(Some(RETURN_REPRESENTATION), true).await.unwrap();

        assert_eq!(headers["apikey"], "anon");
        assert_eq!(headers[AUTHORIZATION], "Bearer anon");
        assert_eq!(headers[ACCEPT], SINGLE_OBJECT);
        assert_eq!(headers["prefer"], RETURN_REPRESENTATION);
    }

    #[test]
    fn test_multiple_orders_are_joined() {
        let ctx = ctx();
        let pairs = ctx
            .from("comments")
            .order("created_at", true)
            .order("id", true)
            .query_pairs();

        assert_eq!(param(&pairs, "order"), Some("created_at.asc,id.asc"));
    }
}
