use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Longest accepted title, counted in bytes.
pub const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// A fresh, not yet persisted todo. The id stays at zero until the
    /// repository assigns one.
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self { id: TodoId::default(), title: title.into(), completed: false, created_at: now, updated_at: now }
    }
}

/// Checks the title only. Emptiness is reported before length.
pub fn validate(todo: &Todo) -> Result<(), ValidationError> {
    if todo.title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if todo.title.len() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong { len: todo.title.len() });
    }
    Ok(())
}
