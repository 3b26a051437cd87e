//! Server error types

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mood_core::{FeedbackError, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinError;

/// Errors that can occur while running the mood server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Error returned from API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read as JSON
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// The blocking task running the operation failed
    #[error("feedback task failed: {0}")]
    Task(#[from] JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Feedback(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Feedback(e) if e.is_validation() => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_REQUEST",
            Self::Task(_) => "INTERNAL_ERROR",
            _ => "STORAGE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "feedback request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                code: self.code().to_string(),
            }),
        )
            .into_response()
    }
}
