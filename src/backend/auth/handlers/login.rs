/**
 * Login Handler
 * 
 * This module implements the authentication handler for POST /api/auth/login.
 * 
 * # Authentication Process
 * 
 * 1. Authenticate the email/password pair against the credential store
 * 2. Issue a signed session token for the verified identity
 * 3. Set the token as an HTTP-only session cookie
 * 4. Return the user info (never the hash, never the token in the body)
 * 
 * # Security Notes
 * 
 * - Unknown email, wrong password, empty fields, and a store failure all
 *   return the same 401 body, so responses cannot be used to enumerate
 *   accounts
 * - Password verification is constant-time within bcrypt
 * - The Secure cookie attribute follows the production flag
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::service::authenticate;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
/// 
/// Verifies the submitted credentials and, on success, sets the session
/// cookie and returns the user info.
/// 
/// # Errors
/// 
/// * `401 Unauthorized` with a uniform body for every credential failure,
///   including a store error (which is logged server-side)
/// * `500 Internal Server Error` only if token signing itself fails
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), BackendError> {
    let user = match authenticate(&state.db_pool, &request.email, &request.password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("Failed login attempt");
            return Err(BackendError::InvalidCredentials);
        }
        Err(e) => {
            // The caller sees an ordinary failed attempt; the store error
            // stays in the logs.
            tracing::error!("Credential store unavailable during login: {:?}", e);
            return Err(BackendError::InvalidCredentials);
        }
    };

    let token = state.sessions.issue(user.user_id).map_err(|e| {
        tracing::error!("Failed to issue session token: {:?}", e);
        BackendError::internal("token issuance failed")
    })?;

    tracing::info!("User logged in: {}", user.user_id);

    let jar = jar.add(session_cookie(token, state.config.production));
    Ok((
        jar,
        Json(AuthResponse {
            user: UserResponse::from(user),
        }),
    ))
}
