//! Startup schema initialization for the `todos` table.

use crate::{ConnectionProvider, Result};

use log::info;

const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INT AUTO_INCREMENT PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        description TEXT,
        completed BOOLEAN DEFAULT FALSE,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Create the `todos` table if it does not exist yet.
///
/// Safe to run against an already-initialized store.
pub async fn ensure_schema(provider: &ConnectionProvider) -> Result<()> {
    let mut conn = provider.acquire().await?;

    sqlx::query(CREATE_TODOS_TABLE).execute(&mut *conn).await?;

    info!("Table 'todos' is ready");

    Ok(())
}
