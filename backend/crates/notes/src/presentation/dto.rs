//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that absence and `null` can be told apart
//! and reported under the field's own name.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, NoteId};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{CategorySummary, CategoryWithCount, Note};
use crate::error::{NotesError, NotesResult};

const NOT_NULL: &str = "This field may not be null.";
const REQUIRED: &str = "This field is required.";

/// Distinguishes `"field": null` (`Some(None)`) from an absent field (`None`)
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Absent is fine, explicit `null` is not
fn reject_null<T>(field: &'static str, value: Option<Option<T>>) -> NotesResult<Option<T>> {
    match value {
        Some(None) => Err(NotesError::invalid(field, NOT_NULL)),
        Some(Some(v)) => Ok(Some(v)),
        None => Ok(None),
    }
}

/// A primary key as sent by a client
///
/// Integers and integer strings (`3`, `"3"`) are both keys. Any other JSON
/// type is kept only to name it in the error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PkValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<IgnoredAny>),
    Object(HashMap<String, IgnoredAny>),
}

impl PkValue {
    /// `Ok(None)` for an empty string, which counts as no value
    fn into_category_id(self) -> NotesResult<Option<CategoryId>> {
        let received = match self {
            PkValue::Int(id) => return Ok(Some(CategoryId::new(id))),
            PkValue::Text(text) if text.trim().is_empty() => return Ok(None),
            PkValue::Text(text) => match text.trim().parse::<i64>() {
                Ok(id) => return Ok(Some(CategoryId::new(id))),
                Err(_) => "str",
            },
            PkValue::Float(_) => "float",
            PkValue::Bool(_) => "bool",
            PkValue::List(_) => "list",
            PkValue::Object(_) => "dict",
        };

        Err(NotesError::invalid(
            "category_id",
            format!("Incorrect type. Expected pk value, received {received}."),
        ))
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub color_hex: Option<String>,
}

impl CreateCategoryRequest {
    pub fn into_parts(self) -> NotesResult<(String, String)> {
        let name = self.name.ok_or(NotesError::invalid("name", REQUIRED))?;
        let color_hex = self
            .color_hex
            .ok_or(NotesError::invalid("color_hex", REQUIRED))?;
        Ok((name, color_hex))
    }
}

/// Category as listed, with its note count
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub color_hex: String,
    pub created_at: DateTime<Utc>,
    pub notes_count: i64,
}

impl From<CategoryWithCount> for CategoryResponse {
    fn from(item: CategoryWithCount) -> Self {
        Self {
            id: item.category.id,
            name: item.category.name,
            color_hex: item.category.color_hex,
            created_at: item.category.created_at,
            notes_count: item.notes_count,
        }
    }
}

// ============================================================================
// Notes
// ============================================================================

/// `?category=` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNotesQuery {
    pub category: Option<String>,
}

/// Create note request
///
/// `category_id` may be absent, `null` or `""`; all pick the default category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub category_id: Option<PkValue>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Option<Option<String>>,
}

/// Validated create note fields
#[derive(Debug)]
pub struct CreateNoteFields {
    pub category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateNoteRequest {
    pub fn into_fields(self) -> NotesResult<CreateNoteFields> {
        Ok(CreateNoteFields {
            category_id: match self.category_id {
                Some(pk) => pk.into_category_id()?,
                None => None,
            },
            title: reject_null("title", self.title)?,
            content: reject_null("content", self.content)?,
        })
    }
}

/// Partial update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub category_id: Option<Option<PkValue>>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Option<Option<String>>,
}

/// Validated update note fields
#[derive(Debug)]
pub struct UpdateNoteFields {
    pub category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    pub fn into_fields(self) -> NotesResult<UpdateNoteFields> {
        Ok(UpdateNoteFields {
            category_id: match reject_null("category_id", self.category_id)? {
                Some(pk) => Some(
                    pk.into_category_id()?
                        .ok_or(NotesError::invalid("category_id", NOT_NULL))?,
                ),
                None => None,
            },
            title: reject_null("title", self.title)?,
            content: reject_null("content", self.content)?,
        })
    }
}

/// Category embedded in a note
#[derive(Debug, Clone, Serialize)]
pub struct NoteCategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub color_hex: String,
}

impl From<CategorySummary> for NoteCategoryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            color_hex: summary.color_hex,
        }
    }
}

/// Note as returned by every note endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: NoteCategoryResponse,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            category: note.category.into(),
            updated_at: note.updated_at,
        }
    }
}
