//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use briefmatch_types::error::{BriefError, FeedbackError, TalentError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Brief(BriefError),
    Feedback(FeedbackError),
    Talent(TalentError),
    /// Validation error raised by the HTTP layer itself.
    Validation(String),
    NotFound(String),
}

impl From<BriefError> for AppError {
    fn from(e: BriefError) -> Self {
        AppError::Brief(e)
    }
}

impl From<FeedbackError> for AppError {
    fn from(e: FeedbackError) -> Self {
        AppError::Feedback(e)
    }
}

impl From<TalentError> for AppError {
    fn from(e: TalentError) -> Self {
        AppError::Talent(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Brief(BriefError::MissingFields(fields)) => (
                StatusCode::BAD_REQUEST,
                "MISSING_FIELDS",
                format!("Missing required fields: {fields}"),
            ),
            AppError::Brief(e @ BriefError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "BRIEF_STORAGE_ERROR", e.to_string())
            }
            AppError::Feedback(e @ FeedbackError::MissingFields) => {
                (StatusCode::BAD_REQUEST, "MISSING_FIELDS", e.to_string())
            }
            AppError::Feedback(e @ FeedbackError::InvalidRating(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Feedback(e @ FeedbackError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "FEEDBACK_STORAGE_ERROR", e.to_string())
            }
            AppError::Talent(TalentError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Talent(e @ TalentError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "TALENT_STORAGE_ERROR", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        }

        ApiResponse::error(status, code, &message).into_response()
    }
}
