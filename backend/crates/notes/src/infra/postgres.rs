//! PostgreSQL Repository Implementations
//!
//! Ownership is part of every statement: the owner id is bound into each
//! `WHERE` clause, and note writes only succeed when the target category
//! belongs to the same owner.

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, NoteId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{
    Category, CategorySummary, CategoryWithCount, NewCategory, NewNote, Note, NotePatch,
};
use crate::domain::repository::{CategoryRepository, NoteRepository};
use crate::domain::value_objects::{CategoryFilter, CategoryName};
use crate::error::{NotesError, NotesResult};

/// `UNIQUE (user_id, name)` on `categories`
const CATEGORIES_USER_NAME_KEY: &str = "categories_user_name_key";

/// Columns of a note joined with its category, aliased for `NoteRow`
const NOTE_COLUMNS: &str = r#"
    n.id, n.user_id, n.title, n.content, n.created_at, n.updated_at,
    c.id AS category_id, c.name AS category_name, c.color_hex AS category_color_hex
"#;

/// PostgreSQL-backed categories and notes repository
#[derive(Clone)]
pub struct PgNotesRepository {
    pool: PgPool,
}

impl PgNotesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgNotesRepository {
    async fn list_with_counts(&self, owner: UserId) -> NotesResult<Vec<CategoryWithCount>> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            r#"
            SELECT c.id, c.user_id, c.name, c.color_hex, c.created_at,
                   COUNT(n.id) AS notes_count
            FROM categories c
            LEFT JOIN notes n ON n.category_id = c.id
            WHERE c.user_id = $1
            GROUP BY c.id
            ORDER BY c.created_at, c.id
            "#,
        )
        .bind(owner.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryCountRow::into_entity).collect())
    }

    async fn find_owned(&self, owner: UserId, id: CategoryId) -> NotesResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, user_id, name, color_hex, created_at
            FROM categories
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.get())
        .bind(owner.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_entity))
    }

    async fn find_earliest(&self, owner: UserId) -> NotesResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, user_id, name, color_hex, created_at
            FROM categories
            WHERE user_id = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(owner.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_entity))
    }

    async fn exists_by_name(&self, owner: UserId, name: &CategoryName) -> NotesResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE user_id = $1 AND name = $2)",
        )
        .bind(owner.get())
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, owner: UserId, category: &NewCategory) -> NotesResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (user_id, name, color_hex)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, color_hex, created_at
            "#,
        )
        .bind(owner.get())
        .bind(category.name.as_str())
        .bind(category.color_hex.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into_entity())
    }
}

// ============================================================================
// Note Repository Implementation
// ============================================================================

impl NoteRepository for PgNotesRepository {
    async fn list(&self, owner: UserId, filter: CategoryFilter) -> NotesResult<Vec<Note>> {
        let sql = format!(
            r#"
            SELECT {NOTE_COLUMNS}
            FROM notes n
            JOIN categories c ON c.id = n.category_id
            WHERE n.user_id = $1
              AND ($2::BIGINT IS NULL OR n.category_id = $2)
            ORDER BY n.updated_at DESC, n.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(owner.get())
            .bind(filter.category_id().map(CategoryId::get))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(NoteRow::into_entity).collect())
    }

    async fn find(&self, owner: UserId, id: NoteId) -> NotesResult<Option<Note>> {
        let sql = format!(
            r#"
            SELECT {NOTE_COLUMNS}
            FROM notes n
            JOIN categories c ON c.id = n.category_id
            WHERE n.id = $1 AND n.user_id = $2
            "#
        );

        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id.get())
            .bind(owner.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(NoteRow::into_entity))
    }

    async fn create(&self, owner: UserId, note: &NewNote) -> NotesResult<Option<Note>> {
        // INSERT ... SELECT inserts nothing unless the category is the owner's
        let sql = format!(
            r#"
            WITH n AS (
                INSERT INTO notes (user_id, category_id, title, content)
                SELECT c.user_id, c.id, $3, $4
                FROM categories c
                WHERE c.id = $2 AND c.user_id = $1
                RETURNING id, user_id, category_id, title, content, created_at, updated_at
            )
            SELECT {NOTE_COLUMNS}
            FROM n
            JOIN categories c ON c.id = n.category_id
            "#
        );

        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(owner.get())
            .bind(note.category_id.get())
            .bind(note.title.as_str())
            .bind(&note.content)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(row.map(NoteRow::into_entity))
    }

    async fn update(
        &self,
        owner: UserId,
        id: NoteId,
        patch: &NotePatch,
    ) -> NotesResult<Option<Note>> {
        // updated_at is strictly increasing even when the clock is not
        let sql = format!(
            r#"
            WITH n AS (
                UPDATE notes
                SET title = COALESCE($3, title),
                    content = COALESCE($4, content),
                    category_id = COALESCE($5, category_id),
                    updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                  AND user_id = $2
                  AND ($5::BIGINT IS NULL OR EXISTS (
                      SELECT 1 FROM categories WHERE id = $5 AND user_id = $2
                  ))
                RETURNING id, user_id, category_id, title, content, created_at, updated_at
            )
            SELECT {NOTE_COLUMNS}
            FROM n
            JOIN categories c ON c.id = n.category_id
            "#
        );

        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id.get())
            .bind(owner.get())
            .bind(patch.title.as_ref().map(|t| t.as_str()))
            .bind(patch.content.as_deref())
            .bind(patch.category_id.map(CategoryId::get))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(row.map(NoteRow::into_entity))
    }

    async fn delete(&self, owner: UserId, id: NoteId) -> NotesResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id.get())
            .bind(owner.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Translate integrity violations into domain errors by constraint
fn map_write_error(err: sqlx::Error) -> NotesError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(CATEGORIES_USER_NAME_KEY) {
            return NotesError::CategoryNameTaken;
        }
        if db_err.is_foreign_key_violation() {
            return NotesError::IntegrityConflict(
                "Referenced category no longer exists or is still in use.".to_string(),
            );
        }
    }
    NotesError::Database(err)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    user_id: i64,
    name: String,
    color_hex: String,
    created_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_entity(self) -> Category {
        Category {
            id: CategoryId::new(self.id),
            user_id: UserId::new(self.user_id),
            name: self.name,
            color_hex: self.color_hex,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryCountRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    notes_count: i64,
}

impl CategoryCountRow {
    fn into_entity(self) -> CategoryWithCount {
        CategoryWithCount {
            category: self.category.into_entity(),
            notes_count: self.notes_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: i64,
    user_id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_id: i64,
    category_name: String,
    category_color_hex: String,
}

impl NoteRow {
    fn into_entity(self) -> Note {
        Note {
            id: NoteId::new(self.id),
            user_id: UserId::new(self.user_id),
            category: CategorySummary {
                id: CategoryId::new(self.category_id),
                name: self.category_name,
                color_hex: self.category_color_hex,
            },
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
