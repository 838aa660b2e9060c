//! JSON body extractor whose rejections use the error envelope.

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::http::error::AppError;

/// Like [`axum::Json`], but a malformed body becomes a `VALIDATION_ERROR`
/// envelope instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
