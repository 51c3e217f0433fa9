#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use thanks_api::config::ServerConfig;
use thanks_api::router::build_app_router;
use thanks_api::state::AppState;
use thanks_store::MemoryStore;

/// Operator credential used by the test configuration.
pub const TEST_USER: &str = "operator";
pub const TEST_PASS: &str = "passphrase";

/// Build a test `ServerConfig` with safe defaults and a configured
/// operator credential.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_user: Some(TEST_USER.to_string()),
        admin_password: Some(TEST_PASS.to_string()),
        issuance_enabled: true,
    }
}

/// Build the full application router over an in-memory store.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(MemoryStore::new()),
    };
    build_app_router(state, &config)
}

/// `Authorization` header value for the given Basic credential.
pub fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Send a GET request with an `Authorization` header.
pub async fn get_authed(app: Router, uri: &str, authorization: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Send a POST request with a JSON body and an `Authorization` header.
pub async fn post_json_authed(app: Router, uri: &str, body: Value, authorization: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization)
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Issue a token through the admin endpoint and return it.
pub async fn issue_token(app: &Router) -> String {
    let response = post_json_authed(
        app.clone(),
        "/api/admin/tokens",
        serde_json::json!({}),
        &basic_auth(TEST_USER, TEST_PASS),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = body_json(response).await;
    json["token"].as_str().expect("token in response").to_string()
}
