//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::NotesAppState;
pub use router::{notes_router, notes_router_generic};
