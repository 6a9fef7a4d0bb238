use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::{Notification, SelectionError, SubmitError};
use crate::services::messaging::whatsapp::LinkError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("invalid date selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("{0}")]
    Submit(#[from] SubmitError),

    #[error("messaging error: {0}")]
    Messaging(#[from] LinkError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session store unavailable")]
    Poisoned,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Selection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Submit(SubmitError::Locked(_)) => StatusCode::CONFLICT,
            AppError::Submit(SubmitError::Incomplete(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Messaging(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let notification: Option<&Notification> = match &self {
            AppError::Submit(SubmitError::Locked(n)) => Some(n),
            _ => None,
        };

        let body = match notification {
            Some(n) => serde_json::json!({ "error": self.to_string(), "notification": n }),
            None => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
