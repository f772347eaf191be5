use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use leadgate::db::LeadStorage;

async fn setup() -> (Router, LeadStorage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "leadgate-test-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = leadgate::db::connect(&database_url)
        .await
        .expect("failed to open test database");

    let state = leadgate::router::AppState::new(storage.clone()).expect("failed to build state");
    let app = leadgate::router::leadgate_router(state);
    (app, storage, temp_path)
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

#[tokio::test]
async fn valid_submission_creates_exactly_one_row() {
    let (app, storage, temp_path) = setup().await;

    let submitted_at = "2026-08-25T09:30:00Z";
    let resp = app
        .oneshot(post_json(
            "/api/leads",
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "industry": "technology",
                "submitted_at": submitted_at,
                "session_id": "sess-abc"
            }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let accepted: serde_json::Value = serde_json::from_slice(&body).expect("body was not json");
    assert_eq!(accepted["status"], "accepted");
    let id: uuid::Uuid = serde_json::from_value(accepted["id"].clone()).expect("id was not a uuid");

    assert_eq!(storage.count().await.expect("count failed"), 1);
    let lead = storage.get_by_id(id).await.expect("stored lead not found");
    assert_eq!(lead.name, "Ada Lovelace");
    assert_eq!(lead.email, "ada@example.com");
    assert_eq!(lead.industry.as_str(), "technology");
    assert_eq!(lead.session_id.as_deref(), Some("sess-abc"));
    let expected: DateTime<Utc> = submitted_at.parse().expect("bad test timestamp");
    assert_eq!(lead.submitted_at, expected);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn duplicate_submission_creates_two_independent_rows() {
    let (app, storage, temp_path) = setup().await;

    let payload = serde_json::json!({
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "industry": "education"
    });

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(post_json("/api/leads", payload.clone()))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    assert_eq!(storage.count().await.expect("count failed"), 2);
    let leads = storage.list_recent(10).await.expect("list failed");
    assert_eq!(leads.len(), 2);
    assert_ne!(leads[0].id, leads[1].id);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn invalid_email_is_rejected_without_insert() {
    let (app, storage, temp_path) = setup().await;

    let resp = app
        .oneshot(post_json(
            "/api/leads",
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "not-an-email",
                "industry": "technology"
            }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains("VALIDATION_ERROR"));
    assert!(body_str.contains("email"));

    assert_eq!(storage.count().await.expect("count failed"), 0);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn whitespace_name_is_rejected_without_insert() {
    let (app, storage, temp_path) = setup().await;

    let resp = app
        .oneshot(post_json(
            "/api/leads",
            serde_json::json!({
                "name": "   ",
                "email": "ada@example.com",
                "industry": "finance"
            }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(storage.count().await.expect("count failed"), 0);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn unknown_industry_is_rejected_without_insert() {
    let (app, storage, temp_path) = setup().await;

    let resp = app
        .oneshot(post_json(
            "/api/leads",
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "industry": "aerospace"
            }),
        ))
        .await
        .expect("request failed");

    // closed enum; rejected at deserialization time, same error body as
    // field validation
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains("VALIDATION_ERROR"));
    assert_eq!(storage.count().await.expect("count failed"), 0);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn malformed_json_gets_the_standard_error_body() {
    let (app, storage, temp_path) = setup().await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/leads")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let parsed: serde_json::Value = serde_json::from_slice(&body).expect("body was not json");
    assert_eq!(parsed["error"]["code"], "VALIDATION_ERROR");
    assert!(parsed["error"]["message"].is_string());
    assert_eq!(storage.count().await.expect("count failed"), 0);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn insert_failure_surfaces_an_error_to_the_user() {
    let (app, storage, temp_path) = setup().await;

    // Break persistence out from under the handler; the notify step is
    // only reachable after a successful insert.
    sqlx::query("DROP TABLE leads")
        .execute(storage.pool())
        .await
        .expect("drop failed");

    let resp = app
        .oneshot(post_json(
            "/api/leads",
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "industry": "technology"
            }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let parsed: serde_json::Value = serde_json::from_slice(&body).expect("body was not json");
    assert_eq!(parsed["error"]["code"], "INTERNAL_ERROR");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn confirmation_endpoint_requires_service_key() {
    let (app, _storage, temp_path) = setup().await;

    let resp = app
        .oneshot(post_json(
            "/functions/send-confirmation",
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "industry": "technology"
            }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains("unauthorized"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (app, _storage, temp_path) = setup().await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn form_page_serves_the_capture_form() {
    let (app, _storage, temp_path) = setup().await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains("lead-form"));
    assert!(body_str.contains("/api/leads"));

    let _ = fs::remove_file(&temp_path);
}
