// crates/shared-kernel/src/infrastructure/rest/utils/rest_test_utils.rs
#![cfg(feature = "test-utils")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use axum::http::{HeaderMap, Method, Uri};
use crate::infrastructure::rest::RestContextBuilder;

pub const TEST_API_KEY: &str = "test-anon-key";

/// Requête reçue par le faux backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub query: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

impl RecordedRequest {
    /// Construit l'entrée à partir des extracteurs axum d'un handler
    pub fn capture(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> Self {
        let query = uri
            .query()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self {
            method: method.to_string(),
            path: uri.path().to_string(),
            headers: headers.clone(),
            query,
            body: serde_json::from_slice(body).ok(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// Journal partagé entre les handlers axum et le test
#[derive(Clone, Default)]
pub struct RequestLog {
    inner: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RequestLog {
    pub fn push(&self, request: RecordedRequest) {
        self.inner.lock().unwrap().push(request);
    }

    pub fn all(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<RecordedRequest> {
        self.inner.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

/// Démarre un routeur axum sur un port libre et renvoie un builder pointé dessus.
/// Le serveur vit jusqu'à la fin du runtime du test.
pub async fn setup_test_backend(router: axum::Router) -> RestContextBuilder {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("Fake backend has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake backend crashed");
    });

    RestContextBuilder::default()
        .with_url(format!("http://{addr}"))
        .with_api_key(TEST_API_KEY)
}
