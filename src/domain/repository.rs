use async_trait::async_trait;

use super::error::Result;
use super::todo::{Todo, TodoId};

/// Storage seam for todos. Every call is atomic with respect to other calls
/// on the same instance; returned values are detached copies.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Assigns the next id (max existing + 1, starting at 1) and appends.
    async fn create(&self, todo: Todo) -> Result<Todo>;
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn find_by_id(&self, id: TodoId) -> Result<Todo>;
    /// Replaces the stored entry with the same id wholesale.
    async fn update(&self, todo: &Todo) -> Result<()>;
    async fn delete(&self, id: TodoId) -> Result<()>;
}
