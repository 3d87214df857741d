//! Delete Note Use Case

use kernel::id::{NoteId, UserId};
use std::sync::Arc;

use crate::domain::repository::NoteRepository;
use crate::error::{NotesError, NotesResult};

pub struct DeleteNoteUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> DeleteNoteUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner: UserId, id: NoteId) -> NotesResult<()> {
        if !self.note_repo.delete(owner, id).await? {
            return Err(NotesError::NoteNotFound);
        }

        tracing::info!(user_id = %owner, note_id = %id, "Note deleted");
        Ok(())
    }
}
