//! Helpers shared by handler tests.

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use crate::app::create_app;
use crate::config::Config;
use crate::state::AppState;
use crate::store::InMemoryStore;

pub fn test_config(external_api_key: Option<&str>) -> Config {
    Config {
        environment: "test".to_string(),
        dynamodb_table: "test-table".to_string(),
        dynamodb_endpoint: None,
        dynamodb_timeout: Duration::from_secs(5),
        external_api_key: external_api_key.map(str::to_string),
        service_host: "127.0.0.1".to_string(),
        service_port: 8000,
        request_timeout: Duration::from_secs(10),
    }
}

/// Full router over the given store. The store handle is returned so tests
/// can inspect it after requests.
pub fn test_app(store: InMemoryStore, external_api_key: Option<&str>) -> (Router, Arc<InMemoryStore>) {
    test_app_with_config(store, test_config(external_api_key))
}

pub fn test_app_with_config(store: InMemoryStore, config: Config) -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(store);
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };
    (create_app(state), store)
}

/// Send one request and decode the JSON body (`Null` for an empty body).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn post_json(uri: &str, body: &JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
