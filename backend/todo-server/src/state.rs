use todo_db::{ConnectionProvider, TodoRepository};

/// Shared request context, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub provider: ConnectionProvider,
    pub todos: TodoRepository,
}

impl AppState {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self {
            todos: TodoRepository::new(provider.clone()),
            provider,
        }
    }
}
