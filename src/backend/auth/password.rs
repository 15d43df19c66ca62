/**
 * Password Hashing and Verification
 * 
 * This module wraps bcrypt for the two operations the auth flow needs:
 * hashing a plaintext password at seed time, and verifying a login attempt
 * against the stored hash.
 * 
 * # Security
 * 
 * - bcrypt is salted and cost-parameterized; `DEFAULT_COST` is used at seed time
 * - Verification is constant-time within bcrypt itself
 * - A malformed or unknown-version stored hash verifies as a mismatch
 *   (fail closed) instead of surfacing an error to the login path
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage
/// 
/// Used by the seed binary and test fixtures; nothing on the HTTP surface
/// creates identities.
/// 
/// # Errors
/// 
/// Returns `bcrypt::BcryptError` if hashing itself fails (effectively
/// never for valid cost parameters).
pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash
/// 
/// Returns `false` both for a mismatch and for a stored hash bcrypt cannot
/// parse. The distinction is logged but never propagated, so a corrupt
/// credential row behaves like a wrong password rather than a 500.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match verify(plaintext, stored_hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("Secret123!").unwrap();
        assert!(verify_password("Secret123!", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("Secret123!").unwrap();
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("Secret123!").unwrap();
        let b = hash_password("Secret123!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!verify_password("Secret123!", "not-a-bcrypt-hash"));
        assert!(!verify_password("Secret123!", ""));
        assert!(!verify_password("Secret123!", "$9z$invalid$format"));
    }
}
