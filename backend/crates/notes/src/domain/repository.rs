//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Every method takes the owner's id; there is no unscoped read or write.

use kernel::id::{CategoryId, NoteId, UserId};

use crate::domain::entities::{
    Category, CategoryWithCount, NewCategory, NewNote, Note, NotePatch,
};
use crate::domain::value_objects::{CategoryFilter, CategoryName};
use crate::error::NotesResult;

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Owner's categories with note counts, oldest first
    async fn list_with_counts(&self, owner: UserId) -> NotesResult<Vec<CategoryWithCount>>;

    /// Category by id, only if owned
    async fn find_owned(&self, owner: UserId, id: CategoryId) -> NotesResult<Option<Category>>;

    /// Owner's oldest category (`created_at`, then `id`)
    async fn find_earliest(&self, owner: UserId) -> NotesResult<Option<Category>>;

    /// Check if the owner already uses this name
    async fn exists_by_name(&self, owner: UserId, name: &CategoryName) -> NotesResult<bool>;

    /// Create a category; a duplicate name fails with `CategoryNameTaken`
    async fn create(&self, owner: UserId, category: &NewCategory) -> NotesResult<Category>;
}

/// Note repository trait
#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    /// Owner's notes, most recently updated first
    async fn list(&self, owner: UserId, filter: CategoryFilter) -> NotesResult<Vec<Note>>;

    /// Note by id, only if owned
    async fn find(&self, owner: UserId, id: NoteId) -> NotesResult<Option<Note>>;

    /// Insert a note
    ///
    /// Returns `None` without writing when `note.category_id` is not owned.
    async fn create(&self, owner: UserId, note: &NewNote) -> NotesResult<Option<Note>>;

    /// Apply a patch and advance `updated_at`
    ///
    /// Returns `None` without writing when the note is not owned or
    /// `patch.category_id` is set to a category that is not owned.
    async fn update(&self, owner: UserId, id: NoteId, patch: &NotePatch)
    -> NotesResult<Option<Note>>;

    /// Delete a note; `false` when nothing owned matched
    async fn delete(&self, owner: UserId, id: NoteId) -> NotesResult<bool>;
}
