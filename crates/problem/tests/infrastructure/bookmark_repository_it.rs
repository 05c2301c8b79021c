// crates/problem/tests/infrastructure/bookmark_repository_it.rs

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use problem::application::toggle_bookmark::{ToggleBookmarkCommand, ToggleBookmarkUseCase};
use problem::domain::entities::ProblemBookmark;
use problem::domain::repositories::BookmarkRepository;
use problem::domain::value_objects::ProblemId;
use problem::infrastructure::rest::repositories::RestBookmarkRepository;
use shared_kernel::clock::SystemClock;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::infrastructure::rest::utils::{setup_test_backend, RecordedRequest, RequestLog};

const ME: &str = "0b7e6a3c-1d2f-4e5a-8b9c-0d1e2f3a4b5c";
const VISIBLE: &str = "11111111-2222-4333-8444-555555555555";

/// Faux `problem_bookmarks` avec état : (user_id, problem_id) uniques
#[derive(Clone, Default)]
struct FakeBookmarks {
    log: RequestLog,
    rows: Arc<Mutex<HashSet<(String, String)>>>,
}

fn strip_eq(value: Option<&str>) -> String {
    value.unwrap_or_default().trim_start_matches("eq.").to_string()
}

async fn bookmarks(
    State(fake): State<FakeBookmarks>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest::capture(&method, &uri, &headers, &body);
    fake.log.push(request.clone());

    if method == Method::POST {
        let row = request.body.clone().unwrap_or_default();
        let key = (
            row["user_id"].as_str().unwrap_or_default().to_string(),
            row["problem_id"].as_str().unwrap_or_default().to_string(),
        );
        // ON CONFLICT DO NOTHING : rien n'est renvoyé pour un doublon
        let created = fake.rows.lock().unwrap().insert(key);
        let returned = if created { json!([row]) } else { json!([]) };
        return (StatusCode::CREATED, Json(returned)).into_response();
    }

    let key = (strip_eq(request.param("user_id")), strip_eq(request.param("problem_id")));

    if method == Method::DELETE {
        let removed = fake.rows.lock().unwrap().remove(&key);
        let returned = if removed {
            json!([{ "user_id": key.0, "problem_id": key.1 }])
        } else {
            json!([])
        };
        return Json(returned).into_response();
    }

    if request.param("select") == Some("user_id") {
        let present = fake.rows.lock().unwrap().contains(&key);
        let returned = if present { json!([{ "user_id": key.0 }]) } else { json!([]) };
        return Json(returned).into_response();
    }

    // Lecture des favoris avec problème embarqué ; le second n'est plus visible
    Json(json!([
        {
            "created_at": "2024-05-03T00:00:00Z",
            "problems": {
                "id": VISIBLE, "user_id": ME, "title": "Street light", "description": "Out",
                "category_id": null, "status": "open", "is_public": true,
                "created_at": "2024-05-01T00:00:00Z", "updated_at": "2024-05-01T00:00:00Z",
                "solved_at": null,
                "profiles": { "id": ME, "username": "me", "avatar_url": null },
                "categories": null
            }
        },
        { "created_at": "2024-05-02T00:00:00Z", "problems": null }
    ]))
    .into_response()
}

async fn setup() -> (Arc<RestBookmarkRepository>, FakeBookmarks) {
    let fake = FakeBookmarks::default();
    let router = Router::new()
        .route(
            "/rest/v1/problem_bookmarks",
            get(bookmarks).post(bookmarks).delete(bookmarks),
        )
        .with_state(fake.clone());

    let ctx = setup_test_backend(router).await.build().unwrap();
    (Arc::new(RestBookmarkRepository::new(ctx)), fake)
}

#[tokio::test]
async fn test_add_is_an_idempotent_upsert() {
    let (repo, fake) = setup().await;
    let bookmark = ProblemBookmark::new(UserId::new(), ProblemId::new(), chrono::Utc::now());

    let first = repo.add(&bookmark).await.unwrap();
    let second = repo.add(&bookmark).await.unwrap();

    assert!(first);
    assert!(!second);
    let request = fake.log.last().unwrap();
    assert_eq!(request.param("on_conflict"), Some("user_id,problem_id"));
    assert_eq!(
        request.header("prefer"),
        Some("resolution=ignore-duplicates,return=representation")
    );
    assert_eq!(fake.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_toggle_over_the_wire_follows_parity() {
    let (repo, _) = setup().await;
    let toggle = ToggleBookmarkUseCase::new(repo.clone(), Arc::new(SystemClock));
    let (user_id, problem_id) = (UserId::new(), ProblemId::new());

    let mut states = Vec::new();
    for _ in 0..4 {
        states.push(
            toggle
                .execute(ToggleBookmarkCommand { user_id, problem_id })
                .await
                .unwrap(),
        );
    }

    assert_eq!(states, [true, false, true, false]);
    assert!(!repo.exists(&user_id, &problem_id).await.unwrap());
}

#[tokio::test]
async fn test_find_by_user_unwraps_embeds_and_skips_hidden_problems() {
    let (repo, fake) = setup().await;

    let problems = repo.find_by_user(&UserId::try_new(ME).unwrap()).await.unwrap();

    let request = fake.log.last().unwrap();
    assert_eq!(request.param("order"), Some("created_at.desc"));
    assert_eq!(
        request.param("select"),
        Some("created_at,problems:problem_id(*,profiles:user_id(id,username,avatar_url),categories:category_id(name))")
    );
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].item.problem.title.as_str(), "Street light");
    assert_eq!(problems[0].author().unwrap().username.as_deref(), Some("me"));
}
