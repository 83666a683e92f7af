use todo_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection failed: {message}")]
    Connection { message: String },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Store assigned id {id} which does not fit todos.id {location}")]
    IdOutOfRange { id: u64, location: ErrorLocation },
}

impl DbError {
    /// The driver's own diagnostic text, without the source location
    pub fn store_message(&self) -> String {
        match self {
            DbError::Connection { message } => message.clone(),
            DbError::Sqlx { source, .. } => source.to_string(),
            DbError::IdOutOfRange { id, .. } => {
                format!("Store assigned id {} which does not fit todos.id", id)
            }
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
