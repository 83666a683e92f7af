#![allow(dead_code)]

//! Test infrastructure for todo-db tests
//!
//! Tests marked `#[ignore]` need a reachable MySQL server configured through
//! the usual DB_HOST / DB_PORT / DB_USER / DB_PASSWORD / DB_NAME variables.
//! Run them with `cargo test -- --ignored`.

use todo_config::{Config, DatabaseConfig};
use todo_core::NewTodo;
use todo_db::{ConnectionProvider, ensure_schema};

/// Database config read from the environment, with a short acquire timeout
pub fn live_config() -> DatabaseConfig {
    let mut config = Config::load()
        .expect("Failed to load test configuration")
        .database;
    config.acquire_timeout_secs = 5;
    config
}

/// Provider connected to the live test database with the schema in place
pub async fn live_provider() -> ConnectionProvider {
    let provider = ConnectionProvider::new(&live_config());
    ensure_schema(&provider)
        .await
        .expect("Failed to initialize schema");
    provider
}

/// Config pointing at a port nothing listens on
pub fn unreachable_config() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        acquire_timeout_secs: 1,
        ..Default::default()
    }
}

/// Title unique to one test run so assertions ignore pre-existing rows
pub fn unique_title(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix} {nanos}")
}

pub fn new_todo(title: &str) -> NewTodo {
    NewTodo::new(title.to_string(), String::new(), false).expect("valid title")
}
