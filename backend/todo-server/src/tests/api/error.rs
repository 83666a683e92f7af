use crate::ApiError;

use todo_core::{CoreError, NewTodo};
use todo_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::not_found("Todo 42 not found");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Todo 42 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation(Some("title"), "Title is required");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_internal_error_returns_500_without_location() {
    let error = ApiError::Internal {
        message: "Failed to list todos: connection refused".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert_eq!(message, "Failed to list todos: connection refused");
    assert!(!message.contains(".rs"));
}

#[test]
fn test_store_error_keeps_driver_text() {
    let db_error = DbError::Connection {
        message: "Access denied for user 'root'@'localhost'".into(),
    };

    let error = ApiError::store("Failed to create todo", &db_error);

    match error {
        ApiError::Internal { message, .. } => {
            assert_eq!(
                message,
                "Failed to create todo: Access denied for user 'root'@'localhost'"
            );
        }
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_core_validation_converts_to_api_validation() {
    let core_error: CoreError = NewTodo::new(" ".into(), String::new(), false).unwrap_err();

    let error: ApiError = core_error.into();

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("title")),
        _ => panic!("Expected Validation error"),
    }
}
