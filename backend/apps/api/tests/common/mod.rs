//! Shared harness for HTTP-level tests
//!
//! The router under test is the real one from `api::build_router`, backed by
//! an in-memory store that implements the same repository traits as the
//! PostgreSQL repositories, ownership checks included.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use auth::AuthConfig;
use auth::domain::{NewAccount, User, UserRepository};
use auth::domain::value_object::email::Email;
use auth::{AuthError, AuthResult};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use kernel::id::{CategoryId, NoteId, UserId};
use notes::{NotesError, NotesResult};
use notes::domain::repository::{CategoryRepository, NoteRepository};
use notes::models::{
    Category, CategoryFilter, CategoryName, CategoryWithCount, NewCategory, NewNote, Note,
    NotePatch,
};
use serde_json::Value;
use tower::ServiceExt;

pub const PASSWORD: &str = "password123";

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Default)]
struct Data {
    users: Vec<User>,
    categories: Vec<Category>,
    notes: Vec<Note>,
    next_id: i64,
    last_tick: Option<DateTime<Utc>>,
    /// Fail signup when inserting the starter category at this index
    fail_starter_at: Option<usize>,
}

impl Data {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Strictly increasing timestamps, like `clock_timestamp()` per row
    fn tick(&mut self) -> DateTime<Utc> {
        let now = match self.last_tick {
            Some(last) => Utc::now().max(last + Duration::microseconds(1)),
            None => Utc::now(),
        };
        self.last_tick = Some(now);
        now
    }

    fn owned_category(&self, owner: UserId, id: CategoryId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id && c.user_id == owner)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<Data>>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, Data> {
        self.data.lock().unwrap()
    }

    /// Make the next signups fail while seeding starter category `index`
    pub fn fail_starter_category_at(&self, index: usize) {
        self.lock().fail_starter_at = Some(index);
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn category_count(&self, owner: UserId) -> usize {
        self.lock()
            .categories
            .iter()
            .filter(|c| c.user_id == owner)
            .count()
    }

    /// Drop every category (and note) of a user
    pub fn remove_categories_of(&self, owner: UserId) {
        let mut data = self.lock();
        data.notes.retain(|n| n.user_id != owner);
        data.categories.retain(|c| c.user_id != owner);
    }
}

impl UserRepository for MemoryStore {
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.lock().users.iter().any(|u| u.email == *email))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn create_account(&self, account: &NewAccount) -> AuthResult<User> {
        let mut data = self.lock();

        if data.users.iter().any(|u| u.email == account.email) {
            return Err(AuthError::EmailTaken);
        }

        // Stage everything, then publish all of it at once
        let user = User {
            id: UserId::new(data.next_id()),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            created_at: data.tick(),
        };

        let mut staged = Vec::new();
        for (index, starter) in account.starter_categories.iter().enumerate() {
            if data.fail_starter_at == Some(index) {
                return Err(AuthError::Internal("category insert failed".into()));
            }
            staged.push(Category {
                id: CategoryId::new(data.next_id()),
                user_id: user.id,
                name: starter.name.to_string(),
                color_hex: starter.color_hex.to_string(),
                created_at: data.tick(),
            });
        }

        data.users.push(user.clone());
        data.categories.extend(staged);

        Ok(user)
    }
}

impl CategoryRepository for MemoryStore {
    async fn list_with_counts(&self, owner: UserId) -> NotesResult<Vec<CategoryWithCount>> {
        let data = self.lock();
        let mut categories: Vec<CategoryWithCount> = data
            .categories
            .iter()
            .filter(|c| c.user_id == owner)
            .map(|c| CategoryWithCount {
                category: c.clone(),
                notes_count: data.notes.iter().filter(|n| n.category.id == c.id).count() as i64,
            })
            .collect();
        categories.sort_by_key(|c| (c.category.created_at, c.category.id));
        Ok(categories)
    }

    async fn find_owned(&self, owner: UserId, id: CategoryId) -> NotesResult<Option<Category>> {
        Ok(self.lock().owned_category(owner, id).cloned())
    }

    async fn find_earliest(&self, owner: UserId) -> NotesResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .filter(|c| c.user_id == owner)
            .min_by_key(|c| (c.created_at, c.id))
            .cloned())
    }

    async fn exists_by_name(&self, owner: UserId, name: &CategoryName) -> NotesResult<bool> {
        Ok(self
            .lock()
            .categories
            .iter()
            .any(|c| c.user_id == owner && c.name == name.as_str()))
    }

    async fn create(&self, owner: UserId, category: &NewCategory) -> NotesResult<Category> {
        let mut data = self.lock();

        if data
            .categories
            .iter()
            .any(|c| c.user_id == owner && c.name == category.name.as_str())
        {
            return Err(NotesError::CategoryNameTaken);
        }

        let created = Category {
            id: CategoryId::new(data.next_id()),
            user_id: owner,
            name: category.name.as_str().to_string(),
            color_hex: category.color_hex.as_str().to_string(),
            created_at: data.tick(),
        };
        data.categories.push(created.clone());

        Ok(created)
    }
}

impl NoteRepository for MemoryStore {
    async fn list(&self, owner: UserId, filter: CategoryFilter) -> NotesResult<Vec<Note>> {
        let data = self.lock();
        let mut notes: Vec<Note> = data
            .notes
            .iter()
            .filter(|n| n.user_id == owner)
            .filter(|n| filter.category_id().is_none_or(|id| n.category.id == id))
            .cloned()
            .collect();
        notes.sort_by(|a, b| (b.updated_at, b.id).cmp(&(a.updated_at, a.id)));
        Ok(notes)
    }

    async fn find(&self, owner: UserId, id: NoteId) -> NotesResult<Option<Note>> {
        Ok(self
            .lock()
            .notes
            .iter()
            .find(|n| n.id == id && n.user_id == owner)
            .cloned())
    }

    async fn create(&self, owner: UserId, note: &NewNote) -> NotesResult<Option<Note>> {
        let mut data = self.lock();

        let Some(category) = data
            .owned_category(owner, note.category_id)
            .map(Category::summary)
        else {
            return Ok(None);
        };

        let now = data.tick();
        let created = Note {
            id: NoteId::new(data.next_id()),
            user_id: owner,
            category,
            title: note.title.as_str().to_string(),
            content: note.content.clone(),
            created_at: now,
            updated_at: now,
        };
        data.notes.push(created.clone());

        Ok(Some(created))
    }

    async fn update(
        &self,
        owner: UserId,
        id: NoteId,
        patch: &NotePatch,
    ) -> NotesResult<Option<Note>> {
        let mut data = self.lock();

        let category = match patch.category_id {
            Some(category_id) => match data.owned_category(owner, category_id) {
                Some(category) => Some(category.summary()),
                None => return Ok(None),
            },
            None => None,
        };

        let now = data.tick();
        let Some(note) = data
            .notes
            .iter_mut()
            .find(|n| n.id == id && n.user_id == owner)
        else {
            return Ok(None);
        };

        if let Some(category) = category {
            note.category = category;
        }
        if let Some(title) = &patch.title {
            note.title = title.as_str().to_string();
        }
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        note.updated_at = now;

        Ok(Some(note.clone()))
    }

    async fn delete(&self, owner: UserId, id: NoteId) -> NotesResult<bool> {
        let mut data = self.lock();
        let before = data.notes.len();
        data.notes.retain(|n| !(n.id == id && n.user_id == owner));
        Ok(data.notes.len() != before)
    }
}

// ============================================================================
// App + HTTP helpers
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub config: AuthConfig,
}

pub fn test_app() -> TestApp {
    let store = MemoryStore::default();
    let config = AuthConfig::with_random_secret();
    let router = api::build_router(store.clone(), store.clone(), config.clone(), Vec::new());

    TestApp {
        router,
        store,
        config,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request(Method::GET, uri, None, cookie)).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> Response<Body> {
        self.send(request(Method::POST, uri, Some(body), cookie))
            .await
    }

    pub async fn patch(&self, uri: &str, body: Value, cookie: Option<&str>) -> Response<Body> {
        self.send(request(Method::PATCH, uri, Some(body), cookie))
            .await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request(Method::DELETE, uri, None, cookie)).await
    }

    /// Sign up, returning the new user's id
    pub async fn sign_up(&self, email: &str) -> UserId {
        let response = self
            .post(
                "/api/auth/signup/",
                serde_json::json!({ "email": email, "password": PASSWORD }),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        UserId::new(body["id"].as_i64().unwrap())
    }

    /// Log in, returning a `Cookie` header value carrying both tokens
    pub async fn log_in(&self, email: &str) -> String {
        let response = self
            .post(
                "/api/auth/login/",
                serde_json::json!({ "email": email, "password": PASSWORD }),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        cookie_header(&response)
    }

    /// Sign up and log in
    pub async fn user(&self, email: &str) -> (UserId, String) {
        let id = self.sign_up(email).await;
        let cookie = self.log_in(email).await;
        (id, cookie)
    }
}

pub fn request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Every `Set-Cookie` header, verbatim
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// The `Set-Cookie` header for one cookie name
pub fn set_cookie_named(response: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with(&prefix))
}

/// Turn `Set-Cookie` headers into a `Cookie` request header
pub fn cookie_header(response: &Response<Body>) -> String {
    set_cookies(response)
        .iter()
        .filter_map(|c| c.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}
