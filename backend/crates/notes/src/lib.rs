//! Notes Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Per-user categories with note counts
//! - Note CRUD with optional category filter
//! - Notes without a category land in the owner's earliest category
//!
//! ## Ownership
//! Every repository call carries the caller's `UserId`. Another user's note
//! is indistinguishable from a missing one, and a note can only be filed
//! under a category owned by the same user.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{NotesError, NotesResult};
pub use infra::postgres::PgNotesRepository;
pub use presentation::router::{notes_router, notes_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
