//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, cookies, router, middleware
//!
//! ## Features
//! - Email + password signup, seeding three default categories atomically
//! - Login issuing an access/refresh JWT pair as HttpOnly cookies
//! - Access-token refresh, logout, current user
//! - `require_auth` middleware and `CurrentUser` extractor for other domains
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (8-character minimum, no upper bound)
//! - Tokens are stateless HS256 JWTs; expiry equals cookie Max-Age
//! - Access and refresh tokens are distinguished by a `typ` claim

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
