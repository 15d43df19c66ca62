//! Content API integration tests
//!
//! CRUD tests for the admin surface and visibility rules for the public
//! surface. These need a running Postgres (`DATABASE_URL`), so they are
//! `#[ignore]`d by default; run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;

use common::auth_helpers::{create_unique_test_user, login_session_cookie};
use common::database::TestDatabase;
use common::test_server;

fn unique_slug(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

fn project_payload(slug: &str, published: bool) -> serde_json::Value {
    serde_json::json!({
        "title": "Demo Project",
        "slug": slug,
        "summary": "A short summary",
        "description": "A longer description",
        "tags": ["rust", "axum"],
        "published": published,
    })
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_create_project_requires_session() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;

    let response = server
        .post("/api/admin/projects")
        .json(&project_payload(&unique_slug("proj"), true))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_create_and_fetch_project() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let slug = unique_slug("proj");
    let response = server
        .post("/api/admin/projects")
        .add_header("Cookie", cookie.as_str())
        .json(&project_payload(&slug, true))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server.get(&format!("/api/projects/{slug}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["slug"], slug);
    assert_eq!(body["tags"], serde_json::json!(["rust", "axum"]));
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_unpublished_project_is_hidden_from_public() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let slug = unique_slug("draft");
    let response = server
        .post("/api/admin/projects")
        .add_header("Cookie", cookie.as_str())
        .json(&project_payload(&slug, false))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    // Hidden from the public detail route
    let response = server.get(&format!("/api/projects/{slug}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Visible to the admin listing
    let response = server
        .get("/api/admin/projects")
        .add_header("Cookie", cookie.as_str())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert!(slugs.contains(&slug.as_str()));
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_duplicate_slug_is_rejected() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let slug = unique_slug("dup");
    let first = server
        .post("/api/admin/projects")
        .add_header("Cookie", cookie.as_str())
        .json(&project_payload(&slug, true))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/api/admin/projects")
        .add_header("Cookie", cookie.as_str())
        .json(&project_payload(&slug, true))
        .await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_invalid_slug_is_rejected() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let response = server
        .post("/api/admin/projects")
        .add_header("Cookie", cookie.as_str())
        .json(&project_payload("Not A Slug", true))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_update_and_delete_post() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let slug = unique_slug("post");
    let created = server
        .post("/api/admin/posts")
        .add_header("Cookie", cookie.as_str())
        .json(&serde_json::json!({
            "title": "Draft",
            "slug": slug,
            "excerpt": "tl;dr",
            "body": "body text",
            "published": false,
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let post: serde_json::Value = created.json();
    assert!(post["published_at"].is_null());
    let id = post["id"].as_str().unwrap().to_string();

    // Publishing stamps published_at
    let updated = server
        .put(&format!("/api/admin/posts/{id}"))
        .add_header("Cookie", cookie.as_str())
        .json(&serde_json::json!({
            "title": "Published",
            "slug": slug,
            "excerpt": "tl;dr",
            "body": "body text",
            "published": true,
        }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let post: serde_json::Value = updated.json();
    assert!(post["published_at"].is_string());

    let deleted = server
        .delete(&format!("/api/admin/posts/{id}"))
        .add_header("Cookie", cookie.as_str())
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let gone = server
        .delete(&format!("/api/admin/posts/{id}"))
        .add_header("Cookie", cookie.as_str())
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_profile_put_then_public_get() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let response = server
        .put("/api/admin/profile")
        .add_header("Cookie", cookie.as_str())
        .json(&serde_json::json!({
            "display_name": "Ada Example",
            "headline": "Engineer",
            "bio": "I build things.",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/api/profile").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["display_name"], "Ada Example");
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_skill_level_bounds_enforced() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let response = server
        .post("/api/admin/skills")
        .add_header("Cookie", cookie.as_str())
        .json(&serde_json::json!({
            "name": "Rust",
            "category": "Languages",
            "level": 9,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
