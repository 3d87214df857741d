//! Domain Entities
//!
//! Core business entities for the notes domain.

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, NoteId, UserId};

use crate::domain::value_objects::{CategoryName, ColorHex, NoteTitle};

/// Category entity - a named, colored bucket owned by one user
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub user_id: UserId,
    pub name: String,
    pub color_hex: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id,
            name: self.name.clone(),
            color_hex: self.color_hex.clone(),
        }
    }
}

/// Category with the number of notes filed under it
#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub category: Category,
    pub notes_count: i64,
}

/// The part of a category embedded in every note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    pub color_hex: String,
}

/// Note entity
///
/// `category` always belongs to the same user as the note.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub user_id: UserId,
    pub category: CategorySummary,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category to be created
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub color_hex: ColorHex,
}

/// Note to be created, with its category already resolved
#[derive(Debug, Clone)]
pub struct NewNote {
    pub category_id: CategoryId,
    pub title: NoteTitle,
    pub content: String,
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub category_id: Option<CategoryId>,
    pub title: Option<NoteTitle>,
    pub content: Option<String>,
}
