//! Application Layer
//!
//! Use cases for categories and notes. Every use case takes the caller's
//! `UserId` and never reaches data owned by anyone else.

pub mod create_category;
pub mod create_note;
pub mod delete_note;
pub mod get_note;
pub mod list_categories;
pub mod list_notes;
pub mod update_note;

// Re-exports
pub use create_category::{CreateCategoryInput, CreateCategoryUseCase};
pub use create_note::{CreateNoteInput, CreateNoteUseCase};
pub use delete_note::DeleteNoteUseCase;
pub use get_note::GetNoteUseCase;
pub use list_categories::ListCategoriesUseCase;
pub use list_notes::ListNotesUseCase;
pub use update_note::{UpdateNoteInput, UpdateNoteUseCase};
