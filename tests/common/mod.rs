use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use devconnector::app::build_app;
use devconnector::auth::jwt::JwtKeys;
use devconnector::auth::repo::InMemoryUserRepository;
use devconnector::config::AppConfig;
use devconnector::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-jwt-secret";

/// Create a test app backed by the in-memory user store.
/// Returns the router, the store and the keys tokens are signed with.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<InMemoryUserRepository>, JwtKeys) {
    create_test_app_with(AppConfig::for_tests(TEST_SECRET))
}

#[allow(dead_code)]
pub fn create_test_app_with(config: AppConfig) -> (Router, Arc<InMemoryUserRepository>, JwtKeys) {
    let keys = JwtKeys::new(&config.jwt);
    let (state, repo) = AppState::in_memory(config);
    (build_app(state), repo, keys)
}

/// Send a request and return the status with the body parsed as JSON
/// (or as a JSON string when the body is not JSON).
#[allow(dead_code)]
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

#[allow(dead_code)]
pub async fn get_with_token(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Error params of an `{"errors": [...]}` body, in order.
#[allow(dead_code)]
pub fn error_params(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["param"].as_str().unwrap_or("").to_string())
        .collect()
}
