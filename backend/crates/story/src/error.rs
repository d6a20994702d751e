//! Story Error Types
//!
//! Story- and media-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Story-specific result type alias
pub type StoryResult<T> = Result<T, StoryError>;

#[derive(Debug, Error)]
pub enum StoryError {
    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------
    #[error("All fields are required")]
    MissingFields,

    /// Body was not the expected JSON document
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// visitedDate / startDate / endDate not usable as epoch milliseconds
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Search query is required")]
    MissingQuery,

    #[error("Start and end dates are required")]
    MissingDateRange,

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------
    /// Unknown id, malformed id, or owned by someone else
    #[error("Travel story not found")]
    StoryNotFound,

    /// Token outlived its account
    #[error("User not found")]
    OwnerNotFound,

    // ------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------
    #[error("No image part")]
    NoImage,

    #[error("No selected file")]
    NoFilename,

    #[error("Invalid file type")]
    InvalidMediaType,

    #[error("Invalid file name")]
    InvalidFilename,

    #[error("File not found")]
    ImageNotFound,

    #[error("Image exceeds the upload size limit")]
    UploadTooLarge,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    // ------------------------------------------------------------------
    // Server
    // ------------------------------------------------------------------
    #[error("Media storage error: {0}")]
    Media(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoryError::MissingFields
            | StoryError::InvalidBody(_)
            | StoryError::InvalidDate(_)
            | StoryError::MissingQuery
            | StoryError::MissingDateRange
            | StoryError::NoImage
            | StoryError::NoFilename
            | StoryError::InvalidMediaType
            | StoryError::InvalidFilename
            | StoryError::InvalidUpload(_) => ErrorKind::BadRequest,
            StoryError::StoryNotFound | StoryError::OwnerNotFound | StoryError::ImageNotFound => {
                ErrorKind::NotFound
            }
            StoryError::UploadTooLarge => ErrorKind::PayloadTooLarge,
            StoryError::Media(_) | StoryError::Database(_) | StoryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            StoryError::Media(_) | StoryError::Database(_) | StoryError::Internal(_) => {
                AppError::internal("Server Error")
            }
            StoryError::MissingFields => AppError::new(self.kind(), self.to_string())
                .with_action("Provide title, story, visitedLocation, imageUrl and visitedDate"),
            StoryError::InvalidMediaType => AppError::new(self.kind(), self.to_string())
                .with_action("Upload a PNG, JPEG or GIF image"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StoryError::Database(e) => {
                tracing::error!(error = %e, "Story database error");
            }
            StoryError::Media(e) => {
                tracing::error!(error = %e, "Media storage error");
            }
            StoryError::Internal(msg) => {
                tracing::error!(message = %msg, "Story internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Story error");
            }
        }
    }
}

impl IntoResponse for StoryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
