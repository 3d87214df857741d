//! HTTP-level tests for the category endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, test_app};
use serde_json::{Value, json};

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_categories_require_authentication() {
    let app = test_app();

    let response = app.get("/api/categories/", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post(
            "/api/categories/",
            json!({ "name": "Work", "color_hex": "#000000" }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_category_appends_to_list() {
    let app = test_app();
    let (_, cookie) = app.user("alice@example.com").await;

    let response = app
        .post(
            "/api/categories/",
            json!({ "name": "  Work ", "color_hex": "#a1b2c3" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["name"], "Work");
    assert_eq!(created["color_hex"], "#A1B2C3");
    assert_eq!(created["notes_count"], 0);
    assert!(created["id"].is_i64());
    assert!(created["created_at"].is_string());

    let body = body_json(app.get("/api/categories/", Some(&cookie)).await).await;
    assert_eq!(
        names(&body),
        ["Random Thoughts", "School", "Personal", "Work"]
    );
}

#[tokio::test]
async fn test_create_category_validation() {
    let app = test_app();
    let (_, cookie) = app.user("alice@example.com").await;

    let cases = [
        (
            json!({ "name": "School", "color_hex": "#000000" }),
            json!({ "name": ["You already have a category with this name."] }),
        ),
        (
            json!({ "name": "   ", "color_hex": "#000000" }),
            json!({ "name": ["This field may not be blank."] }),
        ),
        (
            json!({ "name": "x".repeat(61), "color_hex": "#000000" }),
            json!({ "name": ["Ensure this field has no more than 60 characters."] }),
        ),
        (
            json!({ "name": "Work", "color_hex": "red" }),
            json!({ "color_hex": ["Enter a valid hex color, e.g. #F3C6A3."] }),
        ),
        (
            json!({ "name": "Work" }),
            json!({ "color_hex": ["This field is required."] }),
        ),
    ];

    for (request, expected) in cases {
        let response = app.post("/api/categories/", request, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, expected);
    }
}

#[tokio::test]
async fn test_categories_are_isolated_per_user() {
    let app = test_app();
    let (_, alice) = app.user("alice@example.com").await;
    let (_, bob) = app.user("bob@example.com").await;

    // Same name is fine for a different owner
    let response = app
        .post(
            "/api/categories/",
            json!({ "name": "Work", "color_hex": "#111111" }),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = app
        .post(
            "/api/categories/",
            json!({ "name": "Work", "color_hex": "#222222" }),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let alice_list = body_json(app.get("/api/categories/", Some(&alice)).await).await;
    let bob_list = body_json(app.get("/api/categories/", Some(&bob)).await).await;

    let alice_ids: Vec<i64> = alice_list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    let bob_ids: Vec<i64> = bob_list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    assert_eq!(alice_ids.len(), 4);
    assert_eq!(bob_ids.len(), 4);
    assert!(alice_ids.iter().all(|id| !bob_ids.contains(id)));
}

#[tokio::test]
async fn test_notes_count_tracks_notes() {
    let app = test_app();
    let (_, cookie) = app.user("alice@example.com").await;

    for title in ["one", "two"] {
        let response = app
            .post("/api/notes/", json!({ "title": title }), Some(&cookie))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body = body_json(app.get("/api/categories/", Some(&cookie)).await).await;
    let counts: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["notes_count"].as_i64().unwrap())
        .collect();
    assert_eq!(counts, [2, 0, 0]);
}
