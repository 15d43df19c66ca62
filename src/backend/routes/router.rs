/**
 * Router Configuration
 * 
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 * 
 * # Route Order
 * 
 * 1. Public API routes (auth, content reads)
 * 2. Admin API routes (CRUD, upload)
 * 3. Uploaded-file serving at `/uploads`
 * 4. Fallback handler (404)
 * 
 * The route guard middleware wraps the whole router, including the
 * fallback, so a request for any protected path is redirected whether or
 * not a route exists there.
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::middleware::auth::route_guard;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Public API routes
    let router = configure_api_routes(router);

    // Admin routes (protected by the guard through their path prefix)
    let router = configure_admin_routes(router);

    // Serve uploaded images back
    let router =
        router.nest_service("/uploads", ServeDir::new(&app_state.config.upload_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // The guard sees every request, fallback included
    router
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            route_guard,
        ))
        .with_state(app_state)
}
