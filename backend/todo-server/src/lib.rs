pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod startup;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    todos::{
        create_todo_request::CreateTodoRequest,
        create_todo_response::CreateTodoResponse,
        todos::{create_todo, get_todo, list_todos},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
