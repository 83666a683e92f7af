//! Todo repository.
//!
//! Each method acquires one connection, runs exactly one statement and
//! releases the connection when it returns. There are no explicit
//! transactions; the INSERT is auto-committed by the store.

use crate::{ConnectionProvider, DbError, Result as DbErrorResult};

use todo_core::{ErrorLocation, NewTodo, Todo};

use std::panic::Location;

use chrono::{DateTime, Utc};

#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(r: TodoRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            completed: r.completed,
            created_at: r.created_at,
        }
    }
}

#[derive(Clone)]
pub struct TodoRepository {
    provider: ConnectionProvider,
}

impl TodoRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Insert a todo and return the id the store assigned to it.
    pub async fn create(&self, todo: &NewTodo) -> DbErrorResult<i32> {
        let mut conn = self.provider.acquire().await?;

        let result =
            sqlx::query("INSERT INTO todos (title, description, completed) VALUES (?, ?, ?)")
                .bind(todo.title())
                .bind(todo.description())
                .bind(todo.completed())
                .execute(&mut *conn)
                .await?;

        let id = result.last_insert_id();
        i32::try_from(id).map_err(|_| DbError::IdOutOfRange {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// All todos in whatever order the store returns them.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Todo>> {
        let mut conn = self.provider.acquire().await?;

        let rows = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, description, completed, created_at FROM todos",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Todo>> {
        let mut conn = self.provider.acquire().await?;

        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, description, completed, created_at FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Todo::from))
    }
}
