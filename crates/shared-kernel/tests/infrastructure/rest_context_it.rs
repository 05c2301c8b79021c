// crates/shared-kernel/tests/infrastructure/rest_context_it.rs

use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::rest::utils::{
    setup_test_backend, RecordedRequest, RequestLog, TEST_API_KEY,
};
use shared_kernel::infrastructure::rest::{MemorySessionStore, RestErrorExt};

#[derive(Debug, Deserialize, PartialEq)]
struct ProblemRow {
    id: String,
    title: String,
}

struct Problem;
impl EntityMetadata for Problem {
    fn entity_name() -> &'static str {
        "Problem"
    }
}

struct Bookmark;
impl EntityMetadata for Bookmark {
    fn entity_name() -> &'static str {
        "Bookmark"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "problem_bookmarks_user_id_problem_id_key" => "problem_id",
            _ => "unique_constraint",
        }
    }
}

async fn list_problems(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    log.push(RecordedRequest::capture(&method, &uri, &headers, &body));
    Json(json!([
        { "id": "p-1", "title": "Broken stairs" },
        { "id": "p-2", "title": "Noisy street" }
    ]))
    .into_response()
}

async fn no_rows(State(log): State<RequestLog>, method: Method, uri: Uri, headers: HeaderMap) -> Response {
    log.push(RecordedRequest::capture(&method, &uri, &headers, &[]));
    (
        StatusCode::NOT_ACCEPTABLE,
        Json(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned",
            "details": "The result contains 0 rows",
            "hint": null
        })),
    )
        .into_response()
}

async fn duplicate(State(log): State<RequestLog>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    log.push(RecordedRequest::capture(&method, &uri, &headers, &body));
    (
        StatusCode::CONFLICT,
        Json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"problem_bookmarks_user_id_problem_id_key\"",
            "details": null,
            "hint": null
        })),
    )
        .into_response()
}

async fn gateway_down() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response()
}

fn router(log: RequestLog) -> Router {
    Router::new()
        .route("/rest/v1/problems", get(list_problems))
        .route("/rest/v1/profiles", get(no_rows))
        .route("/rest/v1/problem_bookmarks", post(duplicate))
        .route("/rest/v1/notifications", get(gateway_down))
        .with_state(log)
}

#[tokio::test]
async fn test_list_sends_filters_and_credentials() {
    let log = RequestLog::default();
    let ctx = setup_test_backend(router(log.clone())).await.build().unwrap();

    let rows: Vec<ProblemRow> = ctx
        .from("problems")
        .select("*")
        .eq("status", "solved")
        .order("created_at", false)
        .fetch()
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Broken stairs");

    let request = log.last().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.param("status"), Some("eq.solved"));
    assert_eq!(request.param("order"), Some("created_at.desc"));
    assert_eq!(request.header("apikey"), Some(TEST_API_KEY));
    assert_eq!(
        request.header("authorization"),
        Some(format!("Bearer {TEST_API_KEY}").as_str())
    );
}

#[tokio::test]
async fn test_session_token_replaces_api_key_as_bearer() {
    let log = RequestLog::default();
    let ctx = setup_test_backend(router(log.clone()))
        .await
        .with_session(Arc::new(MemorySessionStore::with_token("user-jwt")))
        .build()
        .unwrap();

    let _: Vec<ProblemRow> = ctx.from("problems").fetch().await.unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.header("authorization"), Some("Bearer user-jwt"));
    assert_eq!(request.header("apikey"), Some(TEST_API_KEY));
}

#[tokio::test]
async fn test_single_row_miss_is_not_found() {
    let log = RequestLog::default();
    let ctx = setup_test_backend(router(log.clone())).await.build().unwrap();

    let result = ctx
        .from("profiles")
        .eq("id", "00000000-0000-0000-0000-000000000001")
        .fetch_single::<ProblemRow>()
        .await
        .map_domain::<Problem>();

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert_eq!(
        log.last().unwrap().header("accept"),
        Some("application/vnd.pgrst.object+json")
    );
}

#[tokio::test]
async fn test_unique_violation_is_already_exists() {
    let log = RequestLog::default();
    let ctx = setup_test_backend(router(log.clone())).await.build().unwrap();

    let result = ctx
        .from("problem_bookmarks")
        .insert::<_, serde_json::Value>(&json!({ "user_id": "u", "problem_id": "p" }))
        .await
        .map_domain::<Bookmark>();

    match result {
        Err(DomainError::AlreadyExists { field, .. }) => assert_eq!(field, "problem_id"),
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }

    let request = log.last().unwrap();
    assert_eq!(request.header("prefer"), Some("return=representation"));
    assert_eq!(request.body.unwrap()["problem_id"], "p");
}

#[tokio::test]
async fn test_non_json_server_error_is_transient() {
    let ctx = setup_test_backend(router(RequestLog::default())).await.build().unwrap();

    let err = ctx
        .from("notifications")
        .fetch::<serde_json::Value>()
        .await
        .map_domain::<Problem>()
        .unwrap_err();

    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unreachable_backend_is_infrastructure_failure() {
    let ctx = shared_kernel::infrastructure::rest::RestContext::builder_raw()
        .with_url("http://127.0.0.1:9")
        .with_api_key(TEST_API_KEY)
        .build()
        .unwrap();

    let err = ctx
        .from("problems")
        .fetch::<ProblemRow>()
        .await
        .map_domain::<Problem>()
        .unwrap_err();

    assert!(err.is_transient());
}
