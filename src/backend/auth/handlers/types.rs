/**
 * Authentication Handler Types
 * 
 * This module defines the request and response types used by the
 * authentication handlers. The login input is a fixed struct, so requests
 * missing either field are rejected at the serde boundary before the
 * authenticator ever runs.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::service::AuthenticatedUser;

/// Login request
///
/// Contains the email and password for authentication. Both fields are
/// required; a payload missing either never reaches the authenticator.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash, never logged)
    pub password: String,
}

/// Auth response
///
/// Returned by the login handler. The session token itself travels in the
/// HTTP-only cookie, not the body.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// The password hash never appears here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email,
        }
    }
}
