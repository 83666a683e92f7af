#![allow(dead_code)]

//! Test infrastructure for todo-server API tests
//!
//! Tests marked `#[ignore]` need a reachable MySQL server configured through
//! DB_HOST / DB_PORT / DB_USER / DB_PASSWORD / DB_NAME.
//! Run them with `cargo test -- --ignored`.

use todo_config::{Config, DatabaseConfig};
use todo_db::{ConnectionProvider, ensure_schema};
use todo_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;

/// Config pointing at a port nothing listens on
pub fn unreachable_config() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        acquire_timeout_secs: 1,
        ..Default::default()
    }
}

/// Router whose store can never be reached
pub fn unreachable_app() -> Router {
    build_router(AppState::new(ConnectionProvider::new(&unreachable_config())))
}

/// Router backed by the live test database, schema in place
pub async fn live_app() -> Router {
    let mut config = Config::load()
        .expect("Failed to load test configuration")
        .database;
    config.acquire_timeout_secs = 5;

    let provider = ConnectionProvider::new(&config);
    ensure_schema(&provider)
        .await
        .expect("Failed to initialize schema");

    build_router(AppState::new(provider))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Title unique to one test run so assertions ignore pre-existing rows
pub fn unique_title(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix} {nanos}")
}
