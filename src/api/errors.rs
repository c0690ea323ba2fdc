use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::RepositoryError;
use crate::domain::expense::DateParseError;

pub const EXPENSE_NOT_FOUND: &str = "Expense not found";

/// API error type with HTTP status code and message
#[derive(Debug, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Maps a repository failure, replacing storage details with `context`
    ///
    /// The underlying error is logged but never sent to the client.
    pub fn from_repository(error: RepositoryError, context: &str) -> Self {
        match error {
            RepositoryError::NotFound(_) => Self::not_found(EXPENSE_NOT_FOUND),
            RepositoryError::Persistence(cause) => {
                tracing::error!(%cause, "{}", context);
                Self::internal_server_error(context)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<DateParseError> for ApiError {
    fn from(_: DateParseError) -> Self {
        Self::bad_request("Invalid date format")
    }
}
