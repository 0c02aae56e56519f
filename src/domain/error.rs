use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("title too long")]
    TitleTooLong { len: usize },
}

/// Failures of the backing JSON document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },
    #[error("malformed todo file {}: {source}", path.display())]
    Malformed { path: PathBuf, #[source] source: serde_json::Error },
    #[error("todo id space exhausted")]
    IdExhausted,
    #[error("failed to encode todos: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("todo not found")]
    NotFound(TodoId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T, E = TodoError> = std::result::Result<T, E>;
