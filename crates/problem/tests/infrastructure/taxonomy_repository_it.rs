// crates/problem/tests/infrastructure/taxonomy_repository_it.rs

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use problem::domain::repositories::TaxonomyRepository;
use problem::domain::value_objects::{ProblemId, TagId};
use problem::infrastructure::rest::repositories::RestTaxonomyRepository;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::rest::utils::{setup_test_backend, RecordedRequest, RequestLog};

const ALREADY_TAGGED: &str = "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee";

async fn relations(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest::capture(&method, &uri, &headers, &body);
    log.push(request.clone());

    match method {
        m if m == Method::POST => {
            let conflict = request
                .body
                .as_ref()
                .and_then(|b| b.as_array())
                .is_some_and(|rows| rows.iter().any(|r| r["problem_id"] == ALREADY_TAGGED));
            if conflict {
                let error = json!({
                    "code": "23505",
                    "message": "duplicate key value violates unique constraint \"problem_tag_relations_pkey\"",
                    "details": null,
                    "hint": null
                });
                (StatusCode::CONFLICT, Json(error)).into_response()
            } else {
                StatusCode::CREATED.into_response()
            }
        }
        m if m == Method::DELETE => Json(json!([])).into_response(),
        _ => Json(json!([
            { "problem_tags": { "id": "0f0e0d0c-0b0a-4908-8706-050403020100", "name": "urgent", "created_at": "2024-01-01T00:00:00Z" } },
            { "problem_tags": { "id": "1f1e1d1c-1b1a-4918-8716-151413121110", "name": "lighting", "created_at": "2024-01-01T00:00:00Z" } },
            { "problem_tags": null }
        ]))
        .into_response(),
    }
}

async fn setup() -> (RestTaxonomyRepository, RequestLog) {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/rest/v1/problem_tag_relations",
            get(relations).post(relations).delete(relations),
        )
        .with_state(log.clone());

    let ctx = setup_test_backend(router).await.build().unwrap();
    (RestTaxonomyRepository::new(ctx), log)
}

#[tokio::test]
async fn test_attach_sends_one_bulk_insert() {
    let (repo, log) = setup().await;
    let problem_id = ProblemId::new();
    let tags = [TagId::new(), TagId::new()];

    repo.attach_tags(&problem_id, &tags).await.unwrap();

    assert_eq!(log.count(), 1);
    let request = log.last().unwrap();
    assert_eq!(request.header("prefer"), Some("return=minimal"));
    let rows = request.body.unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[1]["tag_id"], tags[1].to_string());
    assert_eq!(rows[0]["problem_id"], problem_id.to_string());
}

#[tokio::test]
async fn test_attach_conflict_maps_to_already_exists() {
    let (repo, _) = setup().await;

    let result = repo
        .attach_tags(&ProblemId::try_new(ALREADY_TAGGED).unwrap(), &[TagId::new()])
        .await;

    assert!(matches!(
        result,
        Err(DomainError::AlreadyExists { entity: "ProblemTag", field: "tag_id", .. })
    ));
}

#[tokio::test]
async fn test_detach_filters_by_problem_and_tag_set() {
    let (repo, log) = setup().await;
    let problem_id = ProblemId::new();
    let (a, b) = (TagId::new(), TagId::new());

    repo.detach_tags(&problem_id, &[a, b]).await.unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.param("problem_id"), Some(format!("eq.{problem_id}").as_str()));
    assert_eq!(request.param("tag_id"), Some(format!("in.({a},{b})").as_str()));
}

#[tokio::test]
async fn test_tags_for_problem_are_sorted_by_name() {
    let (repo, log) = setup().await;

    let tags = repo.tags_for_problem(&ProblemId::new()).await.unwrap();

    assert_eq!(log.last().unwrap().param("select"), Some("problem_tags:tag_id(*)"));
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["lighting", "urgent"]);
}
