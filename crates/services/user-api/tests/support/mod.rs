//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use common::DatabaseConfig;
use user_api_lib::config::UserApiConfig;
use user_api_lib::infra::Store;
use user_api_lib::repository::UserStore;

/// Opens a fresh in-memory store with the `users` table in place.
pub async fn create_test_store() -> Store {
    let config = UserApiConfig {
        database: DatabaseConfig::in_memory(),
        ..UserApiConfig::default()
    };
    user_api_lib::open_store(&config)
        .await
        .expect("Failed to open in-memory store")
}

pub async fn create_test_repository() -> UserStore {
    UserStore::new(create_test_store().await)
}

pub async fn create_test_app() -> Router {
    user_api_lib::build_app(create_test_store().await)
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
