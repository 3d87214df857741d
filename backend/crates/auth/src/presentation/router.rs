//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Routes carry their full `/api/auth/...` paths.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let guard = AuthMiddlewareState::new(&config);
    let state = AuthAppState::new(repo, config);

    let protected = Router::new()
        .route("/api/auth/me/", get(handlers::me::<R>))
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    Router::new()
        .route("/api/auth/signup/", post(handlers::sign_up::<R>))
        .route("/api/auth/login/", post(handlers::login::<R>))
        .route("/api/auth/logout/", post(handlers::logout::<R>))
        .route("/api/auth/refresh/", post(handlers::refresh::<R>))
        .merge(protected)
        .with_state(state)
}
