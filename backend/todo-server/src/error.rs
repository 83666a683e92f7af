use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] todo_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] todo_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
