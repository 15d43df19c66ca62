/**
 * Session Cookie Construction
 * 
 * Helpers for the one cookie this application sets. The session token is
 * carried in an HTTP-only cookie so client-side script can never read it;
 * the Secure attribute follows the production flag from config.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "folio_session";

/// Build the session cookie for a freshly issued token
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Build a removal cookie that clears the session on the client
/// 
/// Logout is purely client-side: the stateless token stays valid until
/// natural expiry, so deleting the cookie is the whole operation.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}
