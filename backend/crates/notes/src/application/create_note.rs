//! Create Note Use Case
//!
//! Resolves the target category (explicit or the caller's earliest) and
//! inserts the note.

use kernel::id::{CategoryId, UserId};
use std::sync::Arc;

use crate::domain::entities::{NewNote, Note};
use crate::domain::repository::{CategoryRepository, NoteRepository};
use crate::domain::value_objects::NoteTitle;
use crate::error::{NotesError, NotesResult};

/// Create note input
#[derive(Debug, Default)]
pub struct CreateNoteInput {
    pub category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

pub struct CreateNoteUseCase<R>
where
    R: CategoryRepository + NoteRepository,
{
    repo: Arc<R>,
}

impl<R> CreateNoteUseCase<R>
where
    R: CategoryRepository + NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: UserId, input: CreateNoteInput) -> NotesResult<Note> {
        let title = NoteTitle::new(input.title.as_deref().unwrap_or_default())?;
        let content = input.content.unwrap_or_default();

        let category_id = match input.category_id {
            Some(id) => CategoryRepository::find_owned(&*self.repo, owner, id)
                .await?
                .ok_or(NotesError::CategoryNotOwned(id))?
                .id,
            None => CategoryRepository::find_earliest(&*self.repo, owner)
                .await?
                .ok_or(NotesError::NoCategoryAvailable)?
                .id,
        };

        let new_note = NewNote {
            category_id,
            title,
            content,
        };

        // The insert re-checks ownership in the same statement
        let note = NoteRepository::create(&*self.repo, owner, &new_note)
            .await?
            .ok_or(NotesError::CategoryNotOwned(category_id))?;

        tracing::info!(
            user_id = %owner,
            note_id = %note.id,
            category_id = %note.category.id,
            "Note created"
        );

        Ok(note)
    }
}
