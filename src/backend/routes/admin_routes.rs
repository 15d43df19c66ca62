/**
 * Admin API Routes
 * 
 * Route wiring for the admin dashboard surface. Every path here sits
 * beneath `/api/admin`, which is one of the configured protected prefixes,
 * so the route guard middleware redirects unauthenticated requests before
 * a handler runs.
 * 
 * # Routes
 * 
 * - `GET/POST /api/admin/projects`, `PUT/DELETE /api/admin/projects/{id}`
 * - `GET/POST /api/admin/posts`, `PUT/DELETE /api/admin/posts/{id}`
 * - `POST /api/admin/skills`, `PUT/DELETE /api/admin/skills/{id}`
 * - `POST /api/admin/experience`, `PUT/DELETE /api/admin/experience/{id}`
 * - `PUT /api/admin/profile`
 * - `POST /api/admin/upload`
 */

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::backend::content::handlers as content;
use crate::backend::server::state::AppState;
use crate::backend::upload::{upload_image, MAX_UPLOAD_BYTES};

/// Configure admin routes
pub fn configure_admin_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Projects
        .route(
            "/api/admin/projects",
            axum::routing::get(content::admin_list_projects).post(content::create_project),
        )
        .route(
            "/api/admin/projects/{id}",
            axum::routing::put(content::replace_project).delete(content::remove_project),
        )
        // Posts
        .route(
            "/api/admin/posts",
            axum::routing::get(content::admin_list_posts).post(content::create_post),
        )
        .route(
            "/api/admin/posts/{id}",
            axum::routing::put(content::replace_post).delete(content::remove_post),
        )
        // Skills
        .route(
            "/api/admin/skills",
            axum::routing::post(content::create_skill),
        )
        .route(
            "/api/admin/skills/{id}",
            axum::routing::put(content::replace_skill).delete(content::remove_skill),
        )
        // Experience
        .route(
            "/api/admin/experience",
            axum::routing::post(content::create_experience),
        )
        .route(
            "/api/admin/experience/{id}",
            axum::routing::put(content::replace_experience).delete(content::remove_experience),
        )
        // Profile
        .route(
            "/api/admin/profile",
            axum::routing::put(content::put_profile),
        )
        // Image upload; the body limit leaves headroom over the file cap
        // for the multipart framing
        .route(
            "/api/admin/upload",
            axum::routing::post(upload_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
        )
}
