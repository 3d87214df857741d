//! Sign Up Use Case
//!
//! Creates a new user account together with its default categories.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{account::NewAccount, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email = Email::new(&input.email)?;

        // Friendly error for the common case; the unique index covers races
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let account = NewAccount::with_default_categories(email, password_hash);
        let user = self.user_repo.create_account(&account).await?;

        tracing::info!(
            user_id = %user.id,
            starter_categories = account.starter_categories.len(),
            "User signed up"
        );

        Ok(SignUpOutput { user })
    }
}
