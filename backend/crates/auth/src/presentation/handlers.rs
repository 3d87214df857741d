//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, RefreshUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
    TokenService,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::cookies::SessionCookies;
use crate::presentation::dto::{LoginRequest, OkResponse, SignUpRequest, UserResponse};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
    pub cookies: Arc<SessionCookies>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(TokenService::new(&config)),
            cookies: Arc::new(SessionCookies::new(&config)),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup/
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = SignUpInput {
        email: req.email.ok_or(AuthError::MissingField("email"))?,
        password: req.password.ok_or(AuthError::MissingField("password"))?,
    };

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(output.user))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login/
///
/// Sets both cookies on success; sets nothing on failure. A missing field is
/// a 400 under that field, while wrong credentials are a plain 401.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = SignInInput {
        email: req.email.ok_or(AuthError::MissingField("email"))?,
        password: req.password.ok_or(AuthError::MissingField("password"))?,
    };

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(input).await?;

    let mut headers = HeaderMap::new();
    state
        .cookies
        .set_pair(&mut headers, &output.tokens.access, &output.tokens.refresh)?;

    Ok((headers, Json(UserResponse::from(output.user))))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout/
///
/// Always succeeds. Tokens are stateless, so logging out only clears cookies.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let mut headers = HeaderMap::new();
    state.cookies.clear(&mut headers)?;

    Ok((headers, Json(OkResponse::ok())))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh/
///
/// Replaces the access cookie only; the refresh cookie is not rotated.
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    request_headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let refresh_token = state.cookies.extract_refresh(&request_headers);

    let use_case = RefreshUseCase::new(state.tokens.clone());
    let access = use_case.execute(refresh_token.as_deref())?;

    let mut headers = HeaderMap::new();
    state.cookies.set_access_only(&mut headers, &access)?;

    Ok((headers, Json(OkResponse::ok())))
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/auth/me/
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone());
    let user = use_case.execute(current.user_id).await?;

    Ok(Json(UserResponse::from(user)))
}
