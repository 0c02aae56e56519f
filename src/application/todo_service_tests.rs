#[cfg(test)]
mod tests {
    use super::super::todo_service::{TodoService, TodoServiceImpl};
    use crate::domain::{
        error::{Result, TodoError, ValidationError},
        repository::TodoRepository,
        todo::{Todo, TodoId},
    };
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct State {
        items: Vec<Todo>,
        creates: usize,
        updates: usize,
    }

    #[derive(Clone, Default)]
    struct InMemoryRepo {
        state: Arc<Mutex<State>>,
    }

    impl InMemoryRepo {
        fn with_items(items: Vec<Todo>) -> Self {
            let repo = Self::default();
            repo.state.lock().unwrap().items = items;
            repo
        }
        fn creates(&self) -> usize { self.state.lock().unwrap().creates }
        fn updates(&self) -> usize { self.state.lock().unwrap().updates }
        fn items(&self) -> Vec<Todo> { self.state.lock().unwrap().items.clone() }
    }

    #[async_trait]
    impl TodoRepository for InMemoryRepo {
        async fn create(&self, mut todo: Todo) -> Result<Todo> {
            let mut state = self.state.lock().unwrap();
            state.creates += 1;
            todo.id = TodoId(state.items.iter().map(|t| t.id.0).max().unwrap_or(0) + 1);
            state.items.push(todo.clone());
            Ok(todo)
        }
        async fn list(&self) -> Result<Vec<Todo>> { Ok(self.items()) }
        async fn find_by_id(&self, id: TodoId) -> Result<Todo> {
            self.items().into_iter().find(|t| t.id == id).ok_or(TodoError::NotFound(id))
        }
        async fn update(&self, todo: &Todo) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.updates += 1;
            let slot = state.items.iter_mut().find(|t| t.id == todo.id).ok_or(TodoError::NotFound(todo.id))?;
            *slot = todo.clone();
            Ok(())
        }
        async fn delete(&self, id: TodoId) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            let pos = state.items.iter().position(|t| t.id == id).ok_or(TodoError::NotFound(id))?;
            state.items.remove(pos);
            Ok(())
        }
    }

    fn seeded() -> InMemoryRepo {
        let past = Utc::now() - Duration::hours(1);
        InMemoryRepo::with_items(vec![
            Todo { id: TodoId(1), ..Todo::new("Buy milk", past) },
            Todo { id: TodoId(2), completed: true, ..Todo::new("Read book", past) },
        ])
    }

    #[tokio::test]
    async fn unit_create_and_get() {
        let repo = InMemoryRepo::default();
        let service = TodoServiceImpl::new(repo.clone());
        let created = service.create("Buy milk".into()).await.unwrap();
        assert_eq!(created.id, TodoId(1));
        assert_eq!(created.title, "Buy milk");
        assert!(!created.completed);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.creates(), 1);
        let got = service.find_by_id(created.id).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_title_without_touching_repo() {
        let repo = InMemoryRepo::default();
        let service = TodoServiceImpl::new(repo.clone());
        let err = service.create(String::new()).await.unwrap_err();
        assert!(matches!(err, TodoError::Validation(ValidationError::EmptyTitle)));
        let err = service.create("x".repeat(256)).await.unwrap_err();
        assert!(matches!(err, TodoError::Validation(ValidationError::TitleTooLong { len: 256 })));
        assert_eq!(repo.creates(), 0);
    }

    #[tokio::test]
    async fn list_passes_repo_contents_through() {
        let service = TodoServiceImpl::new(seeded());
        let todos = service.list().await.unwrap();
        assert_eq!(todos.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), ["Buy milk", "Read book"]);
    }

    #[tokio::test]
    async fn find_unknown_id_is_not_found() {
        let service = TodoServiceImpl::new(seeded());
        assert!(matches!(service.find_by_id(TodoId(3)).await, Err(TodoError::NotFound(TodoId(3)))));
    }

    #[tokio::test]
    async fn update_refreshes_updated_at_only() {
        let repo = seeded();
        let before = repo.items()[0].clone();
        let service = TodoServiceImpl::new(repo.clone());

        let updated = service.update(TodoId(1), "Buy milk and eggs".into(), true).await.unwrap();
        assert_eq!(updated.title, "Buy milk and eggs");
        assert!(updated.completed);
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at > before.updated_at);
        assert_eq!(repo.items()[0], updated);
    }

    #[tokio::test]
    async fn update_never_moves_updated_at_before_created_at() {
        let future = Utc::now() + Duration::hours(1);
        let repo = InMemoryRepo::with_items(vec![Todo { id: TodoId(1), ..Todo::new("Plan trip", future) }]);
        let service = TodoServiceImpl::new(repo.clone());

        let updated = service.update(TodoId(1), "Plan trip".into(), true).await.unwrap();
        assert_eq!(updated.created_at, future);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(repo.items()[0], updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = seeded();
        let service = TodoServiceImpl::new(repo.clone());
        let err = service.update(TodoId(9), "x".into(), false).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(TodoId(9))));
        assert_eq!(repo.updates(), 0);
    }

    #[tokio::test]
    async fn update_with_invalid_title_does_not_persist() {
        let repo = seeded();
        let before = repo.items();
        let service = TodoServiceImpl::new(repo.clone());
        let err = service.update(TodoId(1), String::new(), true).await.unwrap_err();
        assert!(matches!(err, TodoError::Validation(ValidationError::EmptyTitle)));
        assert_eq!(repo.updates(), 0);
        assert_eq!(repo.items(), before);
    }

    #[tokio::test]
    async fn delete_delegates_to_repo() {
        let repo = seeded();
        let service = TodoServiceImpl::new(repo.clone());
        service.delete(TodoId(1)).await.unwrap();
        assert_eq!(repo.items().len(), 1);
        assert!(matches!(service.delete(TodoId(1)).await, Err(TodoError::NotFound(_))));
    }
}
