//! Shared test infrastructure
//!
//! Helpers for integration tests: database fixture, auth helpers, and
//! test server construction.

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use folio::backend::auth::guard::RouteGuard;
use folio::backend::auth::sessions::Sessions;
use folio::backend::routes::create_router;
use folio::backend::server::config::AppConfig;
use folio::backend::server::state::AppState;
use sqlx::PgPool;

/// Signing secret used by every test session
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build an `AppState` around a test database pool
pub fn test_state(pool: PgPool) -> AppState {
    let sessions = Sessions::new(TEST_SECRET, 3600);
    let protected = vec!["/admin".to_string(), "/api/admin".to_string()];
    AppState {
        db_pool: pool,
        guard: RouteGuard::new(protected.clone(), sessions.clone()),
        sessions,
        config: AppConfig {
            database_url: String::new(),
            session_secret: TEST_SECRET.to_string(),
            session_ttl_secs: 3600,
            protected_paths: protected,
            production: false,
            port: 0,
            upload_dir: std::env::temp_dir().join("folio-test-uploads"),
        },
    }
}

/// Build a `TestServer` over the full router
pub async fn test_server(pool: PgPool) -> TestServer {
    let state = test_state(pool);
    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .expect("create upload dir");
    TestServer::new(create_router(state)).expect("test server")
}
