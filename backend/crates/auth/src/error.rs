//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bootstrap password missing from process configuration
    #[error("Admin bootstrap password is not configured")]
    BootstrapPasswordMissing,

    /// Supplied password violates the length policy
    #[error("{0}")]
    PasswordValidation(#[from] PasswordPolicyError),

    /// Admin account absent or never initialized
    #[error("Admin not initialized")]
    AdminNotInitialized,

    /// Wrong password
    #[error("Invalid password")]
    InvalidPassword,

    /// No bearer token on a protected route
    #[error("Unauthorized")]
    MissingToken,

    /// Bearer token failed signature or expiry validation
    #[error("Invalid token")]
    InvalidToken,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::BootstrapPasswordMissing | AuthError::PasswordValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::AdminNotInitialized
            | AuthError::InvalidPassword
            | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::FORBIDDEN,
            AuthError::Hash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::BootstrapPasswordMissing | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::AdminNotInitialized
            | AuthError::InvalidPassword
            | AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::InvalidToken => ErrorKind::Forbidden,
            AuthError::Hash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError.
    ///
    /// Server-side failures collapse to a generic message; the detail
    /// stays in the server log.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Invalid admin login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
