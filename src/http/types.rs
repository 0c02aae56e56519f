use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::error::TodoError;

#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match &err {
            TodoError::Validation(_) => Self { status: StatusCode::BAD_REQUEST, message: err.to_string() },
            TodoError::NotFound(_) => Self { status: StatusCode::NOT_FOUND, message: err.to_string() },
            // Paths and parser output stay in the log.
            TodoError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "internal error".into() }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response { (self.status, axum::Json(self)).into_response() }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message { pub message: String }
