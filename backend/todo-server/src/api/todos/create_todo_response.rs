use serde::Serialize;

/// Body of a successful POST /api/todos
#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub message: String,
}
