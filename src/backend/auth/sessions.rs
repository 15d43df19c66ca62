/**
 * Session Token Issuing and Validation
 * 
 * This module mints and validates the signed, time-bounded session tokens
 * (JWTs) that prove a prior successful login. Tokens are stateless and
 * self-contained: there is no server-side session table, and logout is
 * cookie deletion on the client (an issued token stays technically valid
 * until its natural expiry, a documented limitation).
 * 
 * The signing secret and lifetime come from `AppConfig` at startup; the
 * resulting `Sessions` value is immutable for the process lifetime.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// JWT claims structure
/// 
/// Deliberately minimal: the subject id is the only identity data a
/// session carries. Handlers that need more look the user up by id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID as a UUID string
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Session issuer and validator
/// 
/// Construct once from config and share via `AppState`.
#[derive(Clone)]
pub struct Sessions {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl Sessions {
    /// Create a session signer from the process-wide secret and lifetime
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is invalid the second it expires.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation,
            ttl_secs,
        }
    }

    /// Issue a signed session token for a verified identity
    /// 
    /// # Returns
    /// 
    /// JWT token string with `sub`, `iat`, and `exp` claims
    pub fn issue(&self, user_id: uuid::Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Validate a session token
    /// 
    /// Checks the signature and the expiry. Every failure mode (bad
    /// signature, malformed payload, expired) collapses into `None`;
    /// callers must not distinguish reasons to the end user.
    pub fn validate(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Session token rejected: {:?}", e);
                None
            }
        }
    }
}

/// Current Unix timestamp in seconds
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
