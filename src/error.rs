use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::contact::ServiceError;
use crate::db::StoreError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// Store failure. `message` is what the caller sees; `source` is only logged.
    Storage {
        message: &'static str,
        source: StoreError,
    },
}

impl AppError {
    /// Map a service failure onto a response, using `failure` as the public
    /// message when the store is at fault.
    pub fn from_service(err: ServiceError, failure: &'static str) -> Self {
        match err {
            ServiceError::Validation => AppError::BadRequest("All fields are required".to_string()),
            ServiceError::NotFound(_) => AppError::NotFound("Contact not found".to_string()),
            ServiceError::Storage(source) => AppError::Storage {
                message: failure,
                source,
            },
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Storage { message, source } => write!(f, "{message}: {source}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Storage { message, source } => {
                tracing::error!("{message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}
