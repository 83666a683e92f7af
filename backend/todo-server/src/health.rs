//! Health probe for container orchestration.

use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health - can we get a store connection?
///
/// The connection goes straight back to the pool; no query is issued.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.provider.acquire().await {
        Ok(conn) => {
            drop(conn);
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy",
                    database: "connected",
                    error: None,
                }),
            )
                .into_response()
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: "disconnected",
                    error: Some(e.store_message()),
                }),
            )
                .into_response()
        }
    }
}
