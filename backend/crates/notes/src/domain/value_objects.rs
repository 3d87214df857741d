//! Domain Value Objects
//!
//! Validated inputs for the notes domain. Each error is reported under the
//! request field it came from.

use kernel::id::CategoryId;

use crate::error::{NotesError, NotesResult};

const BLANK: &str = "This field may not be blank.";

/// Category name: trimmed, 1..=60 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub const MAX_LENGTH: usize = 60;

    pub fn new(raw: &str) -> NotesResult<Self> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(NotesError::invalid("name", BLANK));
        }
        if name.chars().count() > Self::MAX_LENGTH {
            return Err(NotesError::invalid(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    Self::MAX_LENGTH
                ),
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `#RRGGBB` color, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHex(String);

impl ColorHex {
    pub fn new(raw: &str) -> NotesResult<Self> {
        let color = raw.trim();

        if color.is_empty() {
            return Err(NotesError::invalid("color_hex", BLANK));
        }

        let valid = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(NotesError::invalid(
                "color_hex",
                "Enter a valid hex color, e.g. #F3C6A3.",
            ));
        }

        Ok(Self(color.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Note title: trimmed, at most 200 characters, may be empty
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteTitle(String);

impl NoteTitle {
    pub const MAX_LENGTH: usize = 200;

    pub fn new(raw: &str) -> NotesResult<Self> {
        let title = raw.trim();

        if title.chars().count() > Self::MAX_LENGTH {
            return Err(NotesError::invalid(
                "title",
                format!(
                    "Ensure this field has no more than {} characters.",
                    Self::MAX_LENGTH
                ),
            ));
        }

        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `?category=` filter for the note list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Absent, empty, or `all` select every note; a run of ASCII digits
    /// selects one category; anything else is rejected.
    pub fn parse(raw: Option<&str>) -> NotesResult<Self> {
        match raw {
            None | Some("") | Some("all") => Ok(CategoryFilter::All),
            Some(value) if value.bytes().all(|b| b.is_ascii_digit()) => value
                .parse::<i64>()
                .map(|id| CategoryFilter::Category(CategoryId::new(id)))
                .map_err(|_| NotesError::InvalidCategoryFilter),
            Some(_) => Err(NotesError::InvalidCategoryFilter),
        }
    }

    pub fn category_id(self) -> Option<CategoryId> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(id) => Some(id),
        }
    }
}
