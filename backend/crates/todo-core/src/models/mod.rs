pub mod new_todo;
pub mod todo;
