//! Notes Router

use auth::middleware::{AuthMiddlewareState, require_auth};
use axum::{Router, middleware, routing::get};

use crate::domain::repository::{CategoryRepository, NoteRepository};
use crate::infra::postgres::PgNotesRepository;
use crate::presentation::handlers::{self, NotesAppState};

/// Create the Notes router with PostgreSQL repository
pub fn notes_router(repo: PgNotesRepository, guard: AuthMiddlewareState) -> Router {
    notes_router_generic(repo, guard)
}

/// Create a generic Notes router for any repository implementation
///
/// Every route sits behind `require_auth`.
pub fn notes_router_generic<R>(repo: R, guard: AuthMiddlewareState) -> Router
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let state = NotesAppState::new(repo);

    let detail = get(handlers::get_note::<R>)
        .patch(handlers::update_note::<R>)
        .delete(handlers::delete_note::<R>);

    Router::new()
        .route(
            "/api/categories/",
            get(handlers::list_categories::<R>).post(handlers::create_category::<R>),
        )
        .route(
            "/api/notes/",
            get(handlers::list_notes::<R>).post(handlers::create_note::<R>),
        )
        .route("/api/notes/{id}/", detail.clone())
        .route("/api/notes/{id}", detail)
        .route_layer(middleware::from_fn_with_state(guard, require_auth))
        .with_state(state)
}
