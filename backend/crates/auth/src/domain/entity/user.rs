//! User Entity
//!
//! Credential record for one account.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
///
/// Email is immutable once created; users are never deleted through the API.
#[derive(Debug, Clone)]
pub struct User {
    /// Database identifier
    pub id: UserId,
    /// Lower-cased email (unique, case-insensitive)
    pub email: Email,
    /// Argon2id hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}
