//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use drafter_draft::domain::aggregates::TurnPolicy;
use drafter_draft::store::{DraftRepository, InMemoryDraftRepository};
use http_body_util::BodyExt;
use tower::ServiceExt;

use drafter_api::state::AppState;

/// Build the full app router over a fresh in-memory store with the default
/// open turn policy. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryDraftRepository::new()), TurnPolicy::Open)
}

/// Build the full app router over the given repository and turn policy.
pub fn build_test_app_with(repository: Arc<dyn DraftRepository>, policy: TurnPolicy) -> Router {
    drafter_api::app(AppState::new(repository, policy))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Create a draft through the API and return the `draft` object.
pub async fn create_draft(
    app: &Router,
    drafters: &[&str],
    options: &[&str],
    rounds: u32,
) -> serde_json::Value {
    let (status, json) = post_json(
        app.clone(),
        "/api/create",
        &serde_json::json!({ "drafters": drafters, "options": options, "rounds": rounds }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");
    json["draft"].clone()
}
