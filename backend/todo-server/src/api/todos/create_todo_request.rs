use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo title (required)
    pub title: String,

    /// Optional description, stored as "" when absent or null
    #[serde(default)]
    pub description: Option<String>,

    /// Optional completion flag, false when absent or null
    #[serde(default)]
    pub completed: Option<bool>,
}
