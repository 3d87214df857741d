//! API Application
//!
//! Router assembly and configuration for the notes server. `main` wires this
//! to PostgreSQL; integration tests wire it to in-memory repositories.

pub mod config;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::middleware::AuthMiddlewareState;
use auth::router::auth_router_generic;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use notes::domain::repository::{CategoryRepository, NoteRepository};
use notes::notes_router_generic;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the full application router
///
/// Auth routes and notes routes share one token service configuration, so a
/// cookie issued by login is accepted by every protected route.
pub fn build_router<A, N>(
    auth_repo: A,
    notes_repo: N,
    auth_config: AuthConfig,
    frontend_origins: Vec<HeaderValue>,
) -> Router
where
    A: UserRepository + Clone + Send + Sync + 'static,
    N: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let guard = AuthMiddlewareState::new(&auth_config);

    Router::new()
        .merge(auth_router_generic(auth_repo, auth_config))
        .merge(notes_router_generic(notes_repo, guard))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origins))
}

/// CORS for the browser frontend; cookies require credentials
pub fn cors_layer(frontend_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(frontend_origins))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

async fn not_found() -> AppError {
    AppError::not_found("Not found.")
}
