//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Fields are optional so a missing one is reported under its own name
/// instead of failing the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of an account, returned by signup, login and me
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: Email,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// `{"ok": true}`
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}
