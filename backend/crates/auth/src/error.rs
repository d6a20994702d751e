//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field was absent or blank
    #[error("All fields are required")]
    MissingFields,

    /// Email already registered
    #[error("User already registered")]
    EmailTaken,

    /// Body was not the expected JSON document
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidName(String),

    /// Password rejected by the registration policy
    #[error("{0}")]
    PasswordPolicy(#[from] PasswordPolicyError),

    /// No account for that email / id
    #[error("User not found")]
    UserNotFound,

    /// Wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

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
            AuthError::MissingFields
            | AuthError::InvalidBody(_)
            | AuthError::EmailTaken
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidName(_)
            | AuthError::PasswordPolicy(_) => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Token(_)
            | AuthError::PasswordHash(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidBody(_)
            | AuthError::EmailTaken
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidName(_)
            | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Token(_)
            | AuthError::PasswordHash(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are rendered with a generic message; their
    /// detail only goes to the log.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Server Error"),
            kind => {
                let err = AppError::new(kind, self.to_string());
                match self {
                    AuthError::PasswordPolicy(_) => {
                        err.with_action("Please choose a different password")
                    }
                    _ => err,
                }
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Failed to issue session token");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
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
