//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes, and the
//! [`CurrentUser`] extractor handlers use to learn who is calling.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;
use crate::presentation::cookies::SessionCookies;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
    pub cookies: Arc<SessionCookies>,
}

impl AuthMiddlewareState {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(config)),
            cookies: Arc::new(SessionCookies::new(config)),
        }
    }
}

/// Authenticated caller, inserted into request extensions by [`require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid access cookie
///
/// Missing cookie: 401 "not provided". Present but invalid or expired: 401
/// "not valid". Never reaches the handler in either case.
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = state
        .cookies
        .extract_access(req.headers())
        .ok_or(AuthError::NotAuthenticated)?;

    let user_id = state.tokens.validate(&token)?;

    req.extensions_mut().insert(CurrentUser { user_id });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AuthError::NotAuthenticated)
    }
}
