//! Integration tests for `PgAuthRepository` against a real database.
//!
//! Verifies that:
//! - Signup writes the user and the default categories together
//! - A failed category insert rolls the user row back
//! - Losing the race on `users_email_lower_key` surfaces as `EmailTaken`
//! - Email lookups ignore case

use auth::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use auth::domain::{NewAccount, StarterCategory, UserRepository};
use auth::{AuthError, PgAuthRepository};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Two starter categories with the same name trip `categories_user_name_key`
static CLASHING_CATEGORIES: [StarterCategory; 2] = [
    StarterCategory {
        name: "Inbox",
        color_hex: "#F3C6A3",
    },
    StarterCategory {
        name: "Inbox",
        color_hex: "#B7CCC3",
    },
];

fn password_hash() -> UserPassword {
    let raw = RawPassword::new("password123".to_string()).unwrap();
    UserPassword::from_raw(&raw, None).unwrap()
}

fn account(email: &str) -> NewAccount {
    NewAccount::with_default_categories(Email::new(email).unwrap(), password_hash())
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_create_account_seeds_default_categories(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());

    let user = repo
        .create_account(&account("alice@example.com"))
        .await
        .unwrap();

    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM categories WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user.id.get())
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(names, ["Random Thoughts", "School", "Personal"]);
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_create_account_rolls_back_on_category_failure(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let clashing = NewAccount {
        starter_categories: &CLASHING_CATEGORIES,
        ..account("carol@example.com")
    };

    let err = repo.create_account(&clashing).await.unwrap_err();
    assert!(matches!(err, AuthError::Database(_)), "{err:?}");

    assert_eq!(count(&pool, "users").await, 0);
    assert_eq!(count(&pool, "categories").await, 0);

    // Nothing was left behind to block a retry
    repo.create_account(&account("carol@example.com"))
        .await
        .unwrap();
    assert_eq!(count(&pool, "users").await, 1);
    assert_eq!(count(&pool, "categories").await, 3);
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_email_race_maps_to_email_taken(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());

    // Another request committed the same address in different case
    sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2)")
        .bind("Alice@Example.com")
        .bind(password_hash().as_phc_string())
        .execute(&pool)
        .await
        .unwrap();

    let err = repo
        .create_account(&account("alice@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::EmailTaken), "{err:?}");
    assert_eq!(err.field(), Some("email"));
    assert_eq!(count(&pool, "users").await, 1);
    assert_eq!(count(&pool, "categories").await, 0);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_lookups_ignore_case(pool: PgPool) {
    let repo = PgAuthRepository::new(pool);
    let created = repo
        .create_account(&account("alice@example.com"))
        .await
        .unwrap();

    let shouting = Email::from_db("ALICE@EXAMPLE.COM");
    assert!(repo.exists_by_email(&shouting).await.unwrap());

    let found = repo.find_by_email(&shouting).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email.as_str(), "alice@example.com");

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, created.email);

    let missing = Email::new("nobody@example.com").unwrap();
    assert!(!repo.exists_by_email(&missing).await.unwrap());
    assert!(repo.find_by_email(&missing).await.unwrap().is_none());
}
