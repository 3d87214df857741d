//! List Notes Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_objects::CategoryFilter;
use crate::error::NotesResult;

/// Lists the caller's notes, optionally filtered by category
pub struct ListNotesUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> ListNotesUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    /// `category` is the raw query value. A foreign or unknown category id
    /// yields an empty list.
    pub async fn execute(&self, owner: UserId, category: Option<&str>) -> NotesResult<Vec<Note>> {
        let filter = CategoryFilter::parse(category)?;
        self.note_repo.list(owner, filter).await
    }
}
