use crate::domain::error::Result;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{validate, Todo, TodoId};
use async_trait::async_trait;
use chrono::Utc;

/// The CRUD usecases offered to the transport layer.
#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, title: String) -> Result<Todo>;
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn find_by_id(&self, id: TodoId) -> Result<Todo>;
    async fn update(&self, id: TodoId, title: String, completed: bool) -> Result<Todo>;
    async fn delete(&self, id: TodoId) -> Result<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, title: String) -> Result<Todo> {
        let todo = Todo::new(title, Utc::now());
        validate(&todo)?;
        self.repo.create(todo).await
    }

    async fn list(&self) -> Result<Vec<Todo>> { self.repo.list().await }

    async fn find_by_id(&self, id: TodoId) -> Result<Todo> { self.repo.find_by_id(id).await }

    // Lookup and write take the lock separately.
    async fn update(&self, id: TodoId, title: String, completed: bool) -> Result<Todo> {
        let mut todo = self.repo.find_by_id(id).await?;
        todo.title = title;
        todo.completed = completed;
        todo.updated_at = Utc::now().max(todo.created_at);
        validate(&todo)?;
        self.repo.update(&todo).await?;
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> Result<()> { self.repo.delete(id).await }
}
