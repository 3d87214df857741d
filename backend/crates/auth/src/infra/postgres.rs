//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::{account::NewAccount, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Unique index on `lower(users.email)`
const USERS_EMAIL_KEY: &str = "users_email_lower_key";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE lower(email) = lower($1))",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn create_account(&self, account: &NewAccount) -> AuthResult<User> {
        // Dropping the transaction on any early return rolls back the user row
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_user_insert_error)?;

        for category in account.starter_categories {
            sqlx::query("INSERT INTO categories (user_id, name, color_hex) VALUES ($1, $2, $3)")
                .bind(row.id)
                .bind(category.name)
                .bind(category.color_hex)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        row.into_user()
    }
}

/// Translate a lost race on the email index into the field error
fn map_user_insert_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(USERS_EMAIL_KEY) {
            return AuthError::EmailTaken;
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            id: UserId::new(self.id),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_db(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}
