//! Authentication test helpers
//!
//! Utilities for creating test identities and logging in against a
//! running test server.

use axum::http::StatusCode;
use axum_test::TestServer;
use folio::backend::auth::password::hash_password;
use folio::backend::auth::users::{upsert_user, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Create a test identity in the database
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let password_hash = hash_password(password).expect("hash password");
    let user: User = upsert_user(pool, email, &password_hash)
        .await
        .expect("seed test user");

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
    }
}

/// Create a test identity with a unique email
pub async fn create_unique_test_user(pool: &PgPool) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, &email, "test_password_123").await
}

/// Log in through the HTTP surface and return the `Cookie` header value
/// (`folio_session=<token>`) for follow-up requests
pub async fn login_session_cookie(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().expect("cookie header should be ascii");

    // Keep only the name=value pair; attributes are not sent back
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
