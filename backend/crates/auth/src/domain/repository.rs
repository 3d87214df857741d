//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{account::NewAccount, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Check if an email is registered (case-insensitive)
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Create the user and its starter categories in one transaction
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already registered,
    /// leaving nothing behind.
    async fn create_account(&self, account: &NewAccount) -> AuthResult<User>;
}
