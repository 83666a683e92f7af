use crate::{CoreError, Result};

/// A validated todo that has not been stored yet.
///
/// Fields are private so a `NewTodo` can only exist with a non-blank title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    description: String,
    completed: bool,
}

impl NewTodo {
    #[track_caller]
    pub fn new(title: String, description: String, completed: bool) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(CoreError::validation("title", "Title is required"));
        }

        Ok(Self {
            title,
            description,
            completed,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}
