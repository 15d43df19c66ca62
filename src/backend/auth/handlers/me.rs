/**
 * Get Current User Handler
 * 
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 * 
 * The endpoint sits outside the protected prefixes (the admin frontend
 * polls it to decide whether a session is live), so it validates the
 * session cookie itself instead of relying on the route guard.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::SESSION_COOKIE;
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::find_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Get current user handler
/// 
/// # Errors
/// 
/// * `401 Unauthorized` when the cookie is absent, the token does not
///   validate, or the subject no longer exists. One body for all three.
pub async fn get_me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<UserResponse>, BackendError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(BackendError::InvalidSession)?;

    let claims = state
        .sessions
        .validate(&token)
        .ok_or(BackendError::InvalidSession)?;

    let user_id =
        uuid::Uuid::parse_str(&claims.sub).map_err(|_| BackendError::InvalidSession)?;

    let user = find_user_by_id(&state.db_pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error resolving current user: {:?}", e);
            BackendError::InvalidSession
        })?
        .ok_or(BackendError::InvalidSession)?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
    }))
}
