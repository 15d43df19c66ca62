/**
 * Logout Handler
 * 
 * This module implements the handler for POST /api/auth/logout.
 * 
 * Sessions are stateless, so there is nothing to revoke server-side;
 * logout removes the session cookie and the token expires on its own
 * schedule.
 */

use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::clear_session_cookie;

/// Logout handler
/// 
/// Clears the session cookie. Always succeeds, with or without an active
/// session.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.remove(clear_session_cookie());
    (jar, Json(serde_json::json!({ "message": "logged out" })))
}
