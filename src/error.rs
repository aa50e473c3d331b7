use thiserror::Error;

use crate::domain::ColumnId;

pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Board not found at index {0}")]
    BoardNotFound(usize),

    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Invalid column ID format: {0}")]
    InvalidColumnId(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
