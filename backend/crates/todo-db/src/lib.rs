pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

pub use connection::connection_provider::ConnectionProvider;
pub use error::{DbError, Result};
pub use repositories::todo_repository::TodoRepository;
pub use schema::ensure_schema;
