//! Update Note Use Case
//!
//! Partial update: absent fields are left as they are.

use kernel::id::{CategoryId, NoteId, UserId};
use std::sync::Arc;

use crate::domain::entities::{Note, NotePatch};
use crate::domain::repository::{CategoryRepository, NoteRepository};
use crate::domain::value_objects::NoteTitle;
use crate::error::{NotesError, NotesResult};

/// Update note input
#[derive(Debug, Default)]
pub struct UpdateNoteInput {
    pub category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

pub struct UpdateNoteUseCase<R>
where
    R: CategoryRepository + NoteRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateNoteUseCase<R>
where
    R: CategoryRepository + NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner: UserId,
        id: NoteId,
        input: UpdateNoteInput,
    ) -> NotesResult<Note> {
        // 404 wins over any validation error for notes the caller cannot see
        if NoteRepository::find(&*self.repo, owner, id).await?.is_none() {
            return Err(NotesError::NoteNotFound);
        }

        let patch = NotePatch {
            title: input.title.as_deref().map(NoteTitle::new).transpose()?,
            content: input.content,
            category_id: input.category_id,
        };

        if let Some(category_id) = patch.category_id {
            CategoryRepository::find_owned(&*self.repo, owner, category_id)
                .await?
                .ok_or(NotesError::CategoryNotOwned(category_id))?;
        }

        let updated = NoteRepository::update(&*self.repo, owner, id, &patch).await?;

        match updated {
            Some(note) => {
                tracing::debug!(user_id = %owner, note_id = %id, "Note updated");
                Ok(note)
            }
            // Deleted or re-parented concurrently
            None => match patch.category_id {
                Some(category_id)
                    if CategoryRepository::find_owned(&*self.repo, owner, category_id)
                        .await?
                        .is_none() =>
                {
                    Err(NotesError::CategoryNotOwned(category_id))
                }
                _ => Err(NotesError::NoteNotFound),
            },
        }
    }
}
