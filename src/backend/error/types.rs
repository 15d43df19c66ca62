/**
 * Backend Error Types
 * 
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 * 
 * # Error Categories
 * 
 * ## Credential Errors
 * 
 * Every failure on the login path (unknown email, wrong password, empty
 * fields, store unavailable) surfaces as `InvalidCredentials` so the client
 * cannot tell which check failed.
 * 
 * ## Session Errors
 * 
 * Invalid, expired, and forged session tokens all surface as `InvalidSession`.
 * 
 * ## Database Errors
 * 
 * Database errors outside the login path map to 500 with a generic body;
 * the underlying sqlx error is logged, never returned to the client.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Backend-specific error types
/// 
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response via `IntoResponse`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Login failed. Covers unknown email, wrong password, and empty
    /// fields so the response never reveals which check failed.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Session cookie missing, expired, malformed, or forged.
    #[error("invalid session")]
    InvalidSession,

    /// Request payload failed validation (e.g. duplicate slug, bad field)
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// File upload was rejected (bad extension, too large, malformed body)
    #[error("Upload error: {message}")]
    Upload {
        /// Human-readable error message
        message: String,
    },

    /// Database error
    /// 
    /// The sqlx error is kept for logging; clients only see a generic body.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should surface as a 500
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upload error
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    /// 
    /// # Status Code Mapping
    /// 
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `InvalidSession` - 401 Unauthorized
    /// - `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Upload` - 400 Bad Request
    /// - `Database` - 500 Internal Server Error
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upload { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    /// 
    /// Database and internal errors return a generic message; the real
    /// error is logged at the site where it occurred.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidCredentials => "invalid email or password".to_string(),
            Self::InvalidSession => "invalid session".to_string(),
            Self::Validation { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::Upload { message } => message.clone(),
            Self::Database(_) => "internal server error".to_string(),
            Self::Internal { .. } => "internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_is_uniform() {
        let error = BackendError::InvalidCredentials;
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message(), "invalid email or password");
    }

    #[test]
    fn test_validation_error() {
        let error = BackendError::validation("slug already in use");
        match &error {
            BackendError::Validation { message } => {
                assert_eq!(message, "slug already in use");
            }
            _ => panic!("Expected Validation"),
        }
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::InvalidSession.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::not_found("no such post").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::upload("extension not allowed").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_does_not_leak() {
        let error = BackendError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "internal server error");
    }
}
