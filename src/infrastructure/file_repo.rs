use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::{Result, StorageError, TodoError},
    repository::TodoRepository,
    todo::{Todo, TodoId},
};

/// Todos kept as one JSON array in a single file.
///
/// Every operation loads the whole document, and mutations write it back in
/// full. A reader/writer lock spans the load/compute/save sequence, so calls
/// on clones of the same repository never interleave. Nothing guards against
/// other processes writing the same path.
#[derive(Clone)]
pub struct FileTodoRepository {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileTodoRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { inner: Arc::new(Inner { path: path.into(), lock: RwLock::new(()) }) }
    }

    pub fn path(&self) -> &Path { &self.inner.path }

    // A missing or zero-byte file is an empty store.
    async fn load(&self) -> Result<Vec<Todo>, StorageError> {
        let path = self.path();
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StorageError::Io { path: path.to_path_buf(), source }),
        };
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let todos: Vec<Todo> = serde_json::from_slice(&data)
            .map_err(|source| StorageError::Malformed { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    async fn save(&self, todos: &[Todo]) -> Result<(), StorageError> {
        let path = self.path();
        let data = serde_json::to_vec_pretty(todos).map_err(StorageError::Encode)?;
        replace_file(path, &data)
            .await
            .map_err(|source| StorageError::Io { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), count = todos.len(), "saved todos");
        Ok(())
    }
}

// Write to a sibling temp file, then rename over the target. The temp file
// never outlives a failed call.
async fn replace_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = temp_path(path);
    let result = match tokio::fs::write(&tmp, data).await {
        Ok(()) => tokio::fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };
    if result.is_err() {
        let _ = tokio::fs::remove_file(&tmp).await;
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// Ids below 1 never lower the floor.
fn next_id(todos: &[Todo]) -> Result<TodoId, StorageError> {
    let max = todos.iter().map(|t| t.id.0).fold(0, i64::max);
    max.checked_add(1).map(TodoId).ok_or(StorageError::IdExhausted)
}

#[async_trait]
impl TodoRepository for FileTodoRepository {
    async fn create(&self, mut todo: Todo) -> Result<Todo> {
        let _guard = self.inner.lock.write().await;
        let mut todos = self.load().await?;
        todo.id = next_id(&todos)?;
        todos.push(todo.clone());
        self.save(&todos).await?;
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let _guard = self.inner.lock.read().await;
        Ok(self.load().await?)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Todo> {
        let _guard = self.inner.lock.read().await;
        self.load().await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    async fn update(&self, todo: &Todo) -> Result<()> {
        let _guard = self.inner.lock.write().await;
        let mut todos = self.load().await?;
        let Some(slot) = todos.iter_mut().find(|t| t.id == todo.id) else {
            return Err(TodoError::NotFound(todo.id));
        };
        *slot = todo.clone();
        Ok(self.save(&todos).await?)
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        let _guard = self.inner.lock.write().await;
        let mut todos = self.load().await?;
        let Some(pos) = todos.iter().position(|t| t.id == id) else {
            return Err(TodoError::NotFound(id));
        };
        todos.remove(pos);
        Ok(self.save(&todos).await?)
    }
}
