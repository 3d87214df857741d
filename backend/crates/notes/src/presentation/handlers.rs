//! HTTP Handlers
//!
//! Every handler takes [`CurrentUser`] and passes its id into the use case;
//! nothing here reads or writes data without an owner.

use auth::middleware::CurrentUser;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::JsonBody;
use kernel::id::NoteId;
use std::sync::Arc;

use crate::application::{
    CreateCategoryInput, CreateCategoryUseCase, CreateNoteInput, CreateNoteUseCase,
    DeleteNoteUseCase, GetNoteUseCase, ListCategoriesUseCase, ListNotesUseCase, UpdateNoteInput,
    UpdateNoteUseCase,
};
use crate::domain::entities::CategoryWithCount;
use crate::domain::repository::{CategoryRepository, NoteRepository};
use crate::error::{NotesError, NotesResult};
use crate::presentation::dto::{
    CategoryResponse, CreateCategoryRequest, CreateNoteRequest, ListNotesQuery, NoteResponse,
    UpdateNoteRequest,
};

/// Shared state for notes handlers
#[derive(Clone)]
pub struct NotesAppState<R>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> NotesAppState<R>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// Path ids are plain digit runs; anything else is a route miss
fn parse_note_id(raw: &str) -> NotesResult<NoteId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotesError::NoteNotFound);
    }
    raw.parse::<i64>()
        .map(NoteId::new)
        .map_err(|_| NotesError::NoteNotFound)
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories/
pub async fn list_categories<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
) -> NotesResult<Json<Vec<CategoryResponse>>>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());
    let categories = use_case.execute(current.user_id).await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// POST /api/categories/
pub async fn create_category<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> NotesResult<impl IntoResponse>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let (name, color_hex) = req.into_parts()?;

    let use_case = CreateCategoryUseCase::new(state.repo.clone());
    let category = use_case
        .execute(current.user_id, CreateCategoryInput { name, color_hex })
        .await?;

    let body = CategoryResponse::from(CategoryWithCount {
        category,
        notes_count: 0,
    });

    Ok((StatusCode::CREATED, Json(body)))
}

// ============================================================================
// Notes
// ============================================================================

/// GET /api/notes/?category=<id|all>
pub async fn list_notes<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
    Query(query): Query<ListNotesQuery>,
) -> NotesResult<Json<Vec<NoteResponse>>>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListNotesUseCase::new(state.repo.clone());
    let notes = use_case
        .execute(current.user_id, query.category.as_deref())
        .await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /api/notes/
pub async fn create_note<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
    JsonBody(req): JsonBody<CreateNoteRequest>,
) -> NotesResult<impl IntoResponse>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let fields = req.into_fields()?;
    let input = CreateNoteInput {
        category_id: fields.category_id,
        title: fields.title,
        content: fields.content,
    };

    let use_case = CreateNoteUseCase::new(state.repo.clone());
    let note = use_case.execute(current.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

/// GET /api/notes/{id}/
pub async fn get_note<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> NotesResult<Json<NoteResponse>>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let id = parse_note_id(&id)?;

    let use_case = GetNoteUseCase::new(state.repo.clone());
    let note = use_case.execute(current.user_id, id).await?;

    Ok(Json(NoteResponse::from(note)))
}

/// PATCH /api/notes/{id}/
pub async fn update_note<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateNoteRequest>,
) -> NotesResult<Json<NoteResponse>>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let id = parse_note_id(&id)?;
    let fields = req.into_fields()?;
    let input = UpdateNoteInput {
        category_id: fields.category_id,
        title: fields.title,
        content: fields.content,
    };

    let use_case = UpdateNoteUseCase::new(state.repo.clone());
    let note = use_case.execute(current.user_id, id, input).await?;

    Ok(Json(NoteResponse::from(note)))
}

/// DELETE /api/notes/{id}/
pub async fn delete_note<R>(
    State(state): State<NotesAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> NotesResult<StatusCode>
where
    R: CategoryRepository + NoteRepository + Clone + Send + Sync + 'static,
{
    let id = parse_note_id(&id)?;

    let use_case = DeleteNoteUseCase::new(state.repo.clone());
    use_case.execute(current.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
