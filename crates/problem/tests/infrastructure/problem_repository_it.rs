// crates/problem/tests/infrastructure/problem_repository_it.rs

use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use problem::application::get_problems::{GetProblemsCommand, GetProblemsUseCase};
use problem::domain::entities::{ProblemFilter, ProblemPatch};
use problem::domain::repositories::ProblemRepository;
use problem::domain::value_objects::{ProblemId, ProblemStatus};
use problem::infrastructure::rest::repositories::{RestAuthorRepository, RestProblemRepository};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::infrastructure::pagination::PageRequest;
use shared_kernel::infrastructure::rest::utils::{setup_test_backend, RecordedRequest, RequestLog};

const ALICE: &str = "0b7e6a3c-1d2f-4e5a-8b9c-0d1e2f3a4b5c";
const GHOST: &str = "9f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a";
const P1: &str = "11111111-2222-4333-8444-555555555555";
const P2: &str = "66666666-7777-4888-9999-aaaaaaaaaaaa";

#[derive(Clone, Default)]
struct Logs {
    problems: RequestLog,
    profiles: RequestLog,
}

/// Faux `problems` : deux lignes résolues, la seconde d'un auteur sans profil
async fn problems(
    State(logs): State<Logs>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest::capture(&method, &uri, &headers, &body);
    logs.problems.push(request.clone());

    if method == Method::GET {
        Json(json!([
            {
                "id": P1, "user_id": ALICE, "title": "Newest", "description": "d",
                "category_id": null, "status": "solved", "is_public": true,
                "created_at": "2024-05-02T00:00:00Z", "updated_at": "2024-05-02T00:00:00Z",
                "solved_at": "2024-05-03T00:00:00Z", "categories": null
            },
            {
                "id": P2, "user_id": GHOST, "title": "Older", "description": "d",
                "category_id": "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d", "status": "solved",
                "is_public": true, "created_at": "2024-05-01T00:00:00Z",
                "updated_at": "2024-05-01T00:00:00Z", "solved_at": null,
                "categories": { "name": "Roads" }
            }
        ]))
        .into_response()
    } else if method == Method::POST {
        (StatusCode::CREATED, Json(json!([request.body.unwrap_or_default()]))).into_response()
    } else {
        // PATCH / DELETE : aucune ligne ne correspond
        Json(json!([])).into_response()
    }
}

async fn profiles(
    State(logs): State<Logs>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    logs.profiles.push(RecordedRequest::capture(&method, &uri, &headers, &body));
    Json(json!([{ "id": ALICE, "username": "alice", "avatar_url": null }])).into_response()
}

async fn setup() -> (RestProblemRepository, RestAuthorRepository, Logs) {
    let logs = Logs::default();
    let router = Router::new()
        .route(
            "/rest/v1/problems",
            get(problems).post(problems).patch(problems).delete(problems),
        )
        .route("/rest/v1/profiles", get(profiles))
        .with_state(logs.clone());

    let ctx = setup_test_backend(router).await.build().unwrap();
    (
        RestProblemRepository::new(ctx.clone()),
        RestAuthorRepository::new(ctx),
        logs,
    )
}

#[tokio::test]
async fn test_find_sends_filters_embed_and_order() {
    let (repo, _, logs) = setup().await;

    let views = repo
        .find(&ProblemFilter {
            status: Some(ProblemStatus::Solved),
            is_public: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = logs.problems.last().unwrap();
    assert_eq!(request.param("select"), Some("*,categories:category_id(name)"));
    assert_eq!(request.param("status"), Some("eq.solved"));
    assert_eq!(request.param("is_public"), Some("eq.true"));
    assert_eq!(request.param("order"), Some("created_at.desc"));
    assert_eq!(request.param("limit"), None);

    assert_eq!(views.len(), 2);
    assert_eq!(views[1].category_name.as_deref(), Some("Roads"));
}

#[tokio::test]
async fn test_problem_id_ignores_other_filters_and_pagination() {
    let (repo, _, logs) = setup().await;
    let id = ProblemId::try_new(P1).unwrap();

    repo.find(&ProblemFilter {
        problem_id: Some(id),
        user_id: Some(UserId::new()),
        status: Some(ProblemStatus::Open),
        page: PageRequest::new(Some(5), Some(20)),
        ..Default::default()
    })
    .await
    .unwrap();

    let request = logs.problems.last().unwrap();
    assert_eq!(request.param("id"), Some(format!("eq.{P1}").as_str()));
    assert_eq!(request.param("user_id"), None);
    assert_eq!(request.param("status"), None);
    assert_eq!(request.param("limit"), None);
    assert_eq!(request.param("offset"), None);
}

#[tokio::test]
async fn test_offset_without_limit_uses_default_window() {
    let (repo, _, logs) = setup().await;

    repo.find(&ProblemFilter {
        page: PageRequest::new(None, Some(30)),
        ..Default::default()
    })
    .await
    .unwrap();

    let request = logs.problems.last().unwrap();
    assert_eq!(request.param("limit"), Some("10"));
    assert_eq!(request.param("offset"), Some("30"));
}

#[tokio::test]
async fn test_get_problems_joins_authors_in_one_batched_call() {
    let (problems_repo, authors_repo, logs) = setup().await;
    let use_case = GetProblemsUseCase::new(Arc::new(problems_repo), Arc::new(authors_repo));

    let result = use_case.execute(GetProblemsCommand::default()).await.unwrap();

    assert_eq!(logs.profiles.count(), 1);
    let request = logs.profiles.last().unwrap();
    assert_eq!(request.param("select"), Some("id,username,avatar_url"));
    assert_eq!(request.param("id"), Some(format!("in.({ALICE},{GHOST})").as_str()));

    assert_eq!(result[0].author().unwrap().username.as_deref(), Some("alice"));
    assert_eq!(result[1].user.id, UserId::try_new(GHOST).unwrap());
    assert!(result[1].author().is_none());
}

#[tokio::test]
async fn test_update_and_delete_without_row() {
    let (repo, _, logs) = setup().await;
    let id = ProblemId::new();
    let update = ProblemPatch {
        status: Some(ProblemStatus::Solved),
        category_id: Some(None),
        ..Default::default()
    }
    .stamp(None, chrono::Utc::now());

    let updated = repo.update(&id, &update).await.unwrap();
    let patch_body = logs.problems.last().unwrap().body.unwrap();
    let deleted = repo.delete(&id).await.unwrap();

    assert!(updated.is_none());
    assert!(!deleted);
    assert_eq!(patch_body["status"], "solved");
    assert!(patch_body["category_id"].is_null());
    assert!(patch_body["solved_at"].is_string());
    assert!(patch_body.get("title").is_none());
}
