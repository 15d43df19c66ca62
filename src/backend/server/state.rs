/**
 * Application State Management
 * 
 * This module defines the application state structure and implements
 * `FromRef` so Axum handlers can extract just the pieces they need.
 * 
 * # Thread Safety
 * 
 * Nothing here is mutable after startup. `PgPool` is internally shared,
 * `Sessions` and `RouteGuard` are immutable values cloned per handler,
 * and `AppConfig` is plain data. Requests therefore share no mutable
 * in-memory state; the database is the only shared resource.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::guard::RouteGuard;
use crate::backend::auth::sessions::Sessions;
use crate::backend::server::config::AppConfig;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (credential store and content store)
    pub db_pool: PgPool,

    /// Session token issuer/validator, built once from config
    pub sessions: Sessions,

    /// Route guard holding the protected-path set
    pub guard: RouteGuard,

    /// Immutable process configuration
    pub config: AppConfig,
}

/// Extract the database pool directly from `AppState`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Extract the session signer directly from `AppState`
impl FromRef<AppState> for Sessions {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

/// Extract the route guard directly from `AppState`
impl FromRef<AppState> for RouteGuard {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.guard.clone()
    }
}

/// Extract the configuration directly from `AppState`
impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
