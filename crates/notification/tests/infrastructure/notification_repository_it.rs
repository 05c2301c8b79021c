// crates/notification/tests/infrastructure/notification_repository_it.rs

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use notification::domain::repositories::NotificationRepository;
use notification::domain::value_objects::NotificationId;
use notification::infrastructure::rest::repositories::RestNotificationRepository;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::infrastructure::rest::utils::{setup_test_backend, RecordedRequest, RequestLog};

const KNOWN: &str = "3c2b1a09-8f7e-4d6c-9b5a-493827161504";
const ME: &str = "0b7e6a3c-1d2f-4e5a-8b9c-0d1e2f3a4b5c";

async fn notifications(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest::capture(&method, &uri, &headers, &body);
    log.push(request.clone());

    let row = json!({
        "id": KNOWN, "user_id": ME, "type": "suggestion",
        "content": "Someone suggested a fix", "reference_id": null,
        "is_read": method == Method::PATCH, "created_at": "2024-05-01T09:00:00Z"
    });

    if method == Method::PATCH && request.param("id") != Some(format!("eq.{KNOWN}").as_str()) {
        return Json(json!([])).into_response();
    }
    Json(json!([row])).into_response()
}

async fn setup() -> (RestNotificationRepository, RequestLog) {
    let log = RequestLog::default();
    let router = Router::new()
        .route("/rest/v1/notifications", get(notifications).patch(notifications))
        .with_state(log.clone());

    let ctx = setup_test_backend(router).await.build().unwrap();
    (RestNotificationRepository::new(ctx), log)
}

#[tokio::test]
async fn test_find_by_user_filters_and_orders() {
    let (repo, log) = setup().await;

    let result = repo.find_by_user(&UserId::try_new(ME).unwrap()).await.unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.param("user_id"), Some(format!("eq.{ME}").as_str()));
    assert_eq!(request.param("order"), Some("created_at.desc"));
    assert_eq!(result[0].kind, "suggestion");
}

#[tokio::test]
async fn test_mark_as_read_sends_only_the_flag() {
    let (repo, log) = setup().await;

    let known = repo.mark_as_read(&NotificationId::try_new(KNOWN).unwrap()).await.unwrap();
    let body = log.last().unwrap().body.unwrap();
    let unknown = repo.mark_as_read(&NotificationId::new()).await.unwrap();

    assert!(known);
    assert!(!unknown);
    assert_eq!(body, json!({ "is_read": true }));
}
