/**
 * Public API Routes
 * 
 * Route wiring for everything outside the protected prefixes:
 * authentication endpoints and the public content reads.
 * 
 * # Routes
 * 
 * ## Authentication
 * - `POST /api/auth/login` - verify credentials, set the session cookie
 * - `POST /api/auth/logout` - clear the session cookie
 * - `GET /api/auth/me` - current user for a live session
 * 
 * ## Content
 * - `GET /api/projects`, `GET /api/projects/{slug}`
 * - `GET /api/posts`, `GET /api/posts/{slug}`
 * - `GET /api/skills`
 * - `GET /api/experience`
 * - `GET /api/profile`
 */

use axum::Router;

use crate::backend::auth::{get_me, login, logout};
use crate::backend::content::handlers as content;
use crate::backend::server::state::AppState;

/// Configure public API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        .route("/api/auth/me", axum::routing::get(get_me))
        // Public content endpoints
        .route("/api/projects", axum::routing::get(content::list_projects))
        .route(
            "/api/projects/{slug}",
            axum::routing::get(content::get_project),
        )
        .route("/api/posts", axum::routing::get(content::list_posts))
        .route("/api/posts/{slug}", axum::routing::get(content::get_post))
        .route("/api/skills", axum::routing::get(content::list_skills))
        .route(
            "/api/experience",
            axum::routing::get(content::list_experience),
        )
        .route("/api/profile", axum::routing::get(content::get_profile))
}
