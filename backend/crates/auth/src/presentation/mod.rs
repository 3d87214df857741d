//! Presentation Layer
//!
//! HTTP handlers, DTOs, cookies, router, and middleware.

pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use cookies::SessionCookies;
pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, CurrentUser, require_auth};
pub use router::{auth_router, auth_router_generic};
