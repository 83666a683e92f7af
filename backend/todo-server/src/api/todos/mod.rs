pub mod create_todo_request;
pub mod create_todo_response;
#[allow(clippy::module_inception)]
pub mod todos;
