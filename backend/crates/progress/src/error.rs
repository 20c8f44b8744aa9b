//! Progress Error Types
//!
//! Progress-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Progress-specific result type alias
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Progress-specific error variants
///
/// Write failures report as client errors on the increment/decrement
/// routes (interface contract); read failures are server errors.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// Counter adjustment failed to persist
    #[error("Progress update failed")]
    Update(#[source] sqlx::Error),

    /// Counter value could not be read
    #[error("Failed to fetch progress value")]
    Fetch(#[source] sqlx::Error),
}

impl ProgressError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProgressError::Update(_) => StatusCode::BAD_REQUEST,
            ProgressError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgressError::Update(_) => ErrorKind::BadRequest,
            ProgressError::Fetch(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProgressError::Update(e) => {
                tracing::error!(error = %e, "Progress update error");
            }
            ProgressError::Fetch(e) => {
                tracing::error!(error = %e, "Progress fetch error");
            }
        }
    }
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
