//! Refresh Use Case
//!
//! Exchanges a refresh token for a new access token.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::error::{AuthError, AuthResult};

pub struct RefreshUseCase {
    tokens: Arc<TokenService>,
}

impl RefreshUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Returns the new access token
    pub fn execute(&self, refresh_token: Option<&str>) -> AuthResult<String> {
        let refresh_token = refresh_token.ok_or(AuthError::RefreshInvalid)?;

        self.tokens
            .issue_access(refresh_token)
            .map_err(|e| match e {
                AuthError::InvalidToken => AuthError::RefreshInvalid,
                other => other,
            })
    }
}
