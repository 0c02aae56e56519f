use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_TODO_FILE: &str = "todos.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub todo_file: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads `TODO_FILE` and `BIND_ADDR`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let todo_file = lookup("TODO_FILE").unwrap_or_else(|| DEFAULT_TODO_FILE.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().with_context(|| format!("invalid BIND_ADDR {bind_addr:?}"))?;
        Ok(Self { todo_file: todo_file.into(), bind_addr })
    }
}
