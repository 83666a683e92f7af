//! Todo REST API handlers
//!
//! Every handler validates its input first, then runs exactly one statement
//! on a connection of its own.

use crate::{ApiError, ApiResult, AppState, CreateTodoRequest, CreateTodoResponse};

use todo_core::{NewTodo, Todo};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;
use serde_json::Value;

const CREATED_MESSAGE: &str = "Todo created successfully";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/todos
///
/// Create a todo from `{title, description?, completed?}`
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateTodoResponse>)> {
    let request = parse_create_request(payload)?;

    let new_todo = NewTodo::new(
        request.title,
        request.description.unwrap_or_default(),
        request.completed.unwrap_or(false),
    )?;

    let id = state
        .todos
        .create(&new_todo)
        .await
        .map_err(|e| ApiError::store("Failed to create todo", &e))?;

    info!("Created todo {}", id);

    Ok((
        StatusCode::CREATED,
        Json(CreateTodoResponse {
            id,
            title: new_todo.title().to_string(),
            description: new_todo.description().to_string(),
            completed: new_todo.completed(),
            message: CREATED_MESSAGE.to_string(),
        }),
    ))
}

/// GET /api/todos
///
/// List all todos in store order
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state
        .todos
        .find_all()
        .await
        .map_err(|e| ApiError::store("Failed to list todos", &e))?;

    Ok(Json(todos))
}

/// GET /api/todos/{id}
///
/// Get a single todo by its integer id. Anything but plain digits is 404.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Todo>> {
    let todo_id = parse_todo_id(&id)
        .ok_or_else(|| ApiError::not_found(format!("Todo {} not found", id)))?;

    let todo = state
        .todos
        .find_by_id(todo_id)
        .await
        .map_err(|e| ApiError::store("Failed to fetch todo", &e))?
        .ok_or_else(|| ApiError::not_found(format!("Todo {} not found", todo_id)))?;

    Ok(Json(todo))
}

// =============================================================================
// Helpers
// =============================================================================

/// Unsigned decimal digits only; signs, fractions and overflow are `None`.
fn parse_todo_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    raw.parse().ok()
}

/// Turn the raw body into a request, rejecting anything that is not an
/// object with a non-null `title`.
fn parse_create_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<CreateTodoRequest> {
    let Json(body) = payload.map_err(|rejection| {
        ApiError::validation(None, format!("Invalid JSON body: {}", rejection.body_text()))
    })?;

    let Some(fields) = body.as_object() else {
        return Err(ApiError::validation(
            None,
            "Request body must be a JSON object",
        ));
    };

    if fields.get("title").is_none_or(Value::is_null) {
        return Err(ApiError::validation(Some("title"), "Title is required"));
    }

    serde_json::from_value(body)
        .map_err(|e| ApiError::validation(None, format!("Invalid request body: {}", e)))
}
