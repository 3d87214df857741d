//! Notes Error Types
//!
//! This module provides notes-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::CategoryId;
use thiserror::Error;

/// Notes-specific result type alias
pub type NotesResult<T> = Result<T, NotesError>;

/// Notes-specific error variants
///
/// Resources owned by another user are reported exactly like absent ones.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Field-level validation failure
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: Cow<'static, str>,
    },

    /// `?category=` is neither a numeric id nor `all`
    #[error("Must be a valid category id or 'all' (without quotes).")]
    InvalidCategoryFilter,

    /// Category id absent or owned by someone else
    #[error("Invalid pk \"{0}\" - object does not exist.")]
    CategoryNotOwned(CategoryId),

    /// Note created without a category by a user who has none
    #[error("No category available; create a category first.")]
    NoCategoryAvailable,

    /// Duplicate (owner, name)
    #[error("You already have a category with this name.")]
    CategoryNameTaken,

    /// Note absent or not owned by the caller
    #[error("Not found.")]
    NoteNotFound,

    /// Write blocked by an integrity constraint
    #[error("{0}")]
    IntegrityConflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NotesError {
    /// Field-scoped 400
    pub fn invalid(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        NotesError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotesError::Validation { .. }
            | NotesError::InvalidCategoryFilter
            | NotesError::CategoryNotOwned(_)
            | NotesError::NoCategoryAvailable
            | NotesError::CategoryNameTaken => ErrorKind::BadRequest,
            NotesError::NoteNotFound => ErrorKind::NotFound,
            NotesError::IntegrityConflict(_) => ErrorKind::Conflict,
            NotesError::Database(_) | NotesError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Request field the error is reported under, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            NotesError::Validation { field, .. } => Some(*field),
            NotesError::InvalidCategoryFilter => Some("category"),
            NotesError::CategoryNotOwned(_) | NotesError::NoCategoryAvailable => {
                Some("category_id")
            }
            NotesError::CategoryNameTaken => Some("name"),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self.field() {
            Some(field) => err.with_field(field),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NotesError::Database(e) => {
                tracing::error!(error = %e, "Notes database error");
            }
            NotesError::Internal(msg) => {
                tracing::error!(message = %msg, "Notes internal error");
            }
            NotesError::CategoryNotOwned(category_id) => {
                tracing::warn!(%category_id, "Category not owned by caller");
            }
            NotesError::IntegrityConflict(msg) => {
                tracing::warn!(message = %msg, "Integrity conflict");
            }
            _ => {
                tracing::debug!(error = %self, "Notes error");
            }
        }
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Pool exhaustion and outages surface as 503 rather than 500
            NotesError::Database(err) => AppError::from(err).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for NotesError {
    fn from(err: AppError) -> Self {
        NotesError::Internal(err.to_string())
    }
}
