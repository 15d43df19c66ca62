/**
 * Server Initialization
 * 
 * This module handles the initialization and setup of the Axum HTTP server:
 * configuration loading, database pool creation, migrations, and route
 * configuration.
 * 
 * # Initialization Process
 * 
 * 1. Load `AppConfig` from the environment
 * 2. Connect the PostgreSQL pool and run migrations
 * 3. Build the session signer and route guard from config
 * 4. Ensure the uploads directory exists
 * 5. Create the router with the guard layered over everything
 * 
 * Unlike a cache or an optional integration, the database is a hard
 * collaborator here (credential store and content store), so a failed
 * connection aborts startup instead of degrading.
 */

use axum::Router;
use sqlx::PgPool;

use crate::backend::auth::guard::RouteGuard;
use crate::backend::auth::sessions::Sessions;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
/// 
/// # Errors
/// 
/// Returns an error when configuration is incomplete, the database is
/// unreachable, or migrations fail.
pub async fn create_app() -> Result<(Router<()>, AppConfig), Box<dyn std::error::Error>> {
    tracing::info!("Initializing folio backend server");

    let config = AppConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let db_pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let sessions = Sessions::new(&config.session_secret, config.session_ttl_secs);
    let guard = RouteGuard::new(config.protected_paths.clone(), sessions.clone());

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let app_state = AppState {
        db_pool,
        sessions,
        guard,
        config: config.clone(),
    };

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok((app, config))
}
