//! Integration test helpers
//!
//! Tests drive the fully-layered router in process via `tower::oneshot`,
//! with an empty store (no demo seed). Fixtures that have no public POST
//! endpoint (stores, categories, centers) are created through the
//! repositories, exactly like the seeding path does.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub use connect_server::{Config, ServerState};

/// Build a router over a fresh, unseeded state
pub fn test_app() -> (Router, ServerState) {
    let config = Config::for_tests();
    let state = ServerState::initialize(&config);
    (connect_server::api::app(state.clone()), state)
}

/// Send one request, return status and parsed JSON body
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
