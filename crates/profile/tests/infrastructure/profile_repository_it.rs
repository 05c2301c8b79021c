// crates/profile/tests/infrastructure/profile_repository_it.rs

use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use profile::application::get_or_create_profile::{GetOrCreateProfileCommand, GetOrCreateProfileUseCase};
use profile::domain::entities::ProfilePatch;
use profile::domain::repositories::ProfileRepository;
use profile::infrastructure::rest::repositories::RestProfileRepository;
use shared_kernel::clock::SystemClock;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::rest::utils::{setup_test_backend, RecordedRequest, RequestLog};

const KNOWN_ID: &str = "6f1c1e1a-3b1d-4c1e-9a7e-2f0a4b9c8d7e";

/// Faux `profiles` : une seule ligne connue (au format hérité), insertions renvoyées telles quelles
async fn profiles(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest::capture(&method, &uri, &headers, &body);
    log.push(request.clone());

    let known = request.param("id") == Some(format!("eq.{KNOWN_ID}").as_str());

    if method == Method::GET && known {
        Json(json!([{
            "id": KNOWN_ID,
            "username": "alice",
            "interests": "hiking, chess",
            "skills": ["rust"],
            "social_links": { "github": "https://github.com/alice" },
            "reputation": 7,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }]))
        .into_response()
    } else if method == Method::POST {
        let row = request.body.unwrap_or_default();
        (StatusCode::CREATED, Json(json!([row]))).into_response()
    } else {
        // Lecture inconnue ou PATCH sans ligne correspondante
        Json(json!([])).into_response()
    }
}

async fn setup() -> (RestProfileRepository, RequestLog) {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/rest/v1/profiles",
            get(profiles).post(profiles).patch(profiles),
        )
        .with_state(log.clone());

    let ctx = setup_test_backend(router).await.build().unwrap();
    (RestProfileRepository::new(ctx), log)
}

#[tokio::test]
async fn test_find_by_id_normalizes_legacy_row() {
    let (repo, log) = setup().await;

    let profile = repo
        .find_by_id(&UserId::try_new(KNOWN_ID).unwrap())
        .await
        .unwrap()
        .expect("Known profile should be found");

    assert_eq!(profile.interests.as_slice(), ["hiking", "chess"]);
    assert_eq!(profile.skills.as_slice(), ["rust"]);
    assert_eq!(profile.social_links.github().unwrap().as_str(), "https://github.com/alice");
    assert_eq!(profile.reputation, 7);
    assert_eq!(log.last().unwrap().param("limit"), Some("1"));
}

#[tokio::test]
async fn test_find_by_id_absent_is_none() {
    let (repo, _log) = setup().await;

    let result = repo.find_by_id(&UserId::new()).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_or_create_inserts_placeholder_once() {
    let (repo, log) = setup().await;
    let use_case = GetOrCreateProfileUseCase::new(Arc::new(repo), Arc::new(SystemClock));
    let id = UserId::new();

    let profile = use_case.execute(GetOrCreateProfileCommand { user_id: id }).await.unwrap();

    assert_eq!(profile.id, id);
    assert_eq!(
        profile.username.unwrap().as_str(),
        format!("user_{}", id.short())
    );

    let inserts: Vec<_> = log.all().into_iter().filter(|r| r.method == "POST").collect();
    assert_eq!(inserts.len(), 1);
    let body = inserts[0].body.clone().unwrap();
    assert_eq!(body["interests"], json!([]));
    assert_eq!(body["reputation"], 0);
}

/// Faux `profiles` où tout pseudo provisoire court est déjà pris
async fn profiles_with_taken_short_usernames(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest::capture(&method, &uri, &headers, &body);
    log.push(request.clone());

    if method != Method::POST {
        return Json(json!([])).into_response();
    }

    let row = request.body.unwrap_or_default();
    let username = row["username"].as_str().unwrap_or_default();
    if username.len() < 30 {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "code": "23505",
                "message": "duplicate key value violates unique constraint \"profiles_username_key\""
            })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(json!([row]))).into_response()
}

#[tokio::test]
async fn test_get_or_create_retries_with_extended_username_on_collision() {
    // Arrange
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/rest/v1/profiles",
            get(profiles_with_taken_short_usernames).post(profiles_with_taken_short_usernames),
        )
        .with_state(log.clone());
    let ctx = setup_test_backend(router).await.build().unwrap();
    let use_case = GetOrCreateProfileUseCase::new(
        Arc::new(RestProfileRepository::new(ctx)),
        Arc::new(SystemClock),
    );
    let id = UserId::new();

    // Act
    let profile = use_case.execute(GetOrCreateProfileCommand { user_id: id }).await.unwrap();

    // Assert
    assert_eq!(profile.id, id);
    assert_eq!(profile.username.unwrap().as_str(), format!("user_{}", id.hex_prefix(25)));
    let inserts = log.all().into_iter().filter(|r| r.method == "POST").count();
    assert_eq!(inserts, 2);
}

#[tokio::test]
async fn test_update_without_row_is_none() {
    let (repo, log) = setup().await;

    let result = repo
        .update(&UserId::new(), &ProfilePatch::default(), chrono::Utc::now())
        .await;

    assert!(matches!(result, Ok(None)));
    let request = log.last().unwrap();
    assert_eq!(request.method, "PATCH");
    assert!(request.body.unwrap().get("updated_at").is_some());
}

#[tokio::test]
async fn test_unreachable_backend_surfaces_as_infrastructure() {
    let ctx = shared_kernel::infrastructure::rest::RestContext::builder_raw()
        .with_url("http://127.0.0.1:9")
        .with_api_key("anon")
        .build()
        .unwrap();
    let repo = RestProfileRepository::new(ctx);

    let result = repo.find_by_id(&UserId::new()).await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
}
