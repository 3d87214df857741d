//! Get Note Use Case

use kernel::id::{NoteId, UserId};
use std::sync::Arc;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::{NotesError, NotesResult};

pub struct GetNoteUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> GetNoteUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner: UserId, id: NoteId) -> NotesResult<Note> {
        self.note_repo
            .find(owner, id)
            .await?
            .ok_or(NotesError::NoteNotFound)
    }
}
