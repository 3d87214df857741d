//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use thiserror::Error;

use crate::domain::value_object::email::EmailError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field was absent or null
    #[error("This field is required.")]
    MissingField(&'static str),

    /// Email failed validation
    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    /// Email already registered (case-insensitive)
    #[error("A user with this email already exists.")]
    EmailTaken,

    /// Password policy violation
    #[error("{0}")]
    PasswordValidation(#[from] PasswordPolicyError),

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No access cookie on a protected route
    #[error("Authentication credentials were not provided.")]
    NotAuthenticated,

    /// Access cookie present but not a valid access token
    #[error("Given token not valid")]
    InvalidToken,

    /// Refresh cookie absent or not a valid refresh token
    #[error("Refresh token missing or invalid")]
    RefreshInvalid,

    /// Token subject no longer exists
    #[error("User not found")]
    UserNotFound,

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
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingField(_)
            | AuthError::InvalidEmail(_)
            | AuthError::EmailTaken
            | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::InvalidToken
            | AuthError::RefreshInvalid
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Request field the error is reported under, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AuthError::MissingField(field) => Some(*field),
            AuthError::InvalidEmail(_) | AuthError::EmailTaken => Some("email"),
            AuthError::PasswordValidation(_) => Some("password"),
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken | AuthError::RefreshInvalid => {
                tracing::warn!(error = %self, "Token rejected");
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
        match self {
            // Pool exhaustion and outages surface as 503 rather than 500
            AuthError::Database(err) => AppError::from(err).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_are_bad_requests() {
        let err = AuthError::EmailTaken;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_app_error().to_body(),
            serde_json::json!({ "email": ["A user with this email already exists."] })
        );

        let err = AuthError::MissingField("password");
        assert_eq!(
            err.to_app_error().to_body(),
            serde_json::json!({ "password": ["This field is required."] })
        );
    }

    #[test]
    fn password_policy_message_is_kept() {
        let err = AuthError::from(PasswordPolicyError::TooShort { min: 8, actual: 3 });
        assert_eq!(err.field(), Some("password"));
        assert_eq!(
            err.to_string(),
            "This password is too short. It must contain at least 8 characters."
        );
    }

    #[test]
    fn authentication_errors_use_detail() {
        assert_eq!(
            AuthError::InvalidCredentials.to_app_error().to_body(),
            serde_json::json!({ "detail": "Invalid credentials" })
        );
        assert_eq!(
            AuthError::RefreshInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::NotAuthenticated.to_app_error().to_body(),
            serde_json::json!({ "detail": "Authentication credentials were not provided." })
        );
    }

    #[test]
    fn internal_errors_are_opaque() {
        let err = AuthError::Internal("signing key exploded".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_app_error().to_body(),
            serde_json::json!({ "detail": "Internal server error" })
        );
    }
}
