use axum::extract::{rejection::JsonRejection, Path, State};
use axum::http::StatusCode;
use axum::{routing::{get, post}, Json, Router};
use serde::Deserialize;

use crate::application::todo_service::TodoService;
use crate::domain::todo::{Todo, TodoId};
use crate::http::types::{ApiError, Message};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todo", post(create_todo::<S>))
        .route("/todo/list", get(list_todos::<S>))
        .route("/todo/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

#[derive(Deserialize)]
struct CreateBody { #[serde(default)] title: String }

#[derive(Deserialize)]
struct UpdateBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    completed: bool,
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, payload: Result<Json<CreateBody>, JsonRejection>) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(body) = payload.map_err(bad_body)?;
    let todo = state.service.create(body.title).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.find_by_id(id).await?))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, payload: Result<Json<UpdateBody>, JsonRejection>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = payload.map_err(bad_body)?;
    let todo = state.service.update(id, body.title, body.completed).await?;
    tracing::info!(%id, "todo updated");
    Ok(Json(todo))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;
    state.service.delete(id).await?;
    tracing::info!(%id, "todo deleted");
    Ok(Json(Message { message: "todo deleted successfully".into() }))
}

fn parse_id(s: &str) -> Result<TodoId, ApiError> { s.parse::<i64>().map(TodoId).map_err(|_| ApiError::bad_request("invalid id")) }

fn bad_body(e: JsonRejection) -> ApiError { ApiError::bad_request(e.body_text()) }
