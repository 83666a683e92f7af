mod api;
mod error;
