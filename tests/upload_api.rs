//! Upload API integration tests
//!
//! Needs a running Postgres (`DATABASE_URL`); `#[ignore]`d by default.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};

use common::auth_helpers::{create_unique_test_user, login_session_cookie};
use common::database::TestDatabase;
use common::test_server;

// Smallest valid PNG header is enough for the handler; content sniffing
// is out of scope, the allow-list is extension-based.
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_upload_png_returns_url() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(PNG_BYTES.to_vec())
            .file_name("avatar.png")
            .mime_type("image/png"),
    );

    let response = server
        .post("/api/admin/upload")
        .add_header("Cookie", cookie.as_str())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_upload_disallowed_extension_is_rejected() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;
    let user = create_unique_test_user(db.pool()).await;
    let cookie = login_session_cookie(&server, &user.email, &user.password).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"#!/bin/sh".to_vec())
            .file_name("script.sh")
            .mime_type("text/x-shellscript"),
    );

    let response = server
        .post("/api/admin/upload")
        .add_header("Cookie", cookie.as_str())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_upload_without_session_redirects() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone()).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(PNG_BYTES.to_vec())
            .file_name("avatar.png")
            .mime_type("image/png"),
    );

    let response = server.post("/api/admin/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
}
