//! Todo entity - a single task record as persisted in the `todos` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored task.
///
/// `id` and `created_at` are assigned by the store and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    /// NULL in rows written outside this service
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
