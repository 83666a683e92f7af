pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_todo::NewTodo;
pub use models::todo::Todo;
