/**
 * Server Configuration
 * 
 * This module handles loading and validation of server configuration from
 * environment variables at process start. The resulting `AppConfig` is
 * immutable for the lifetime of the process.
 * 
 * # Configuration Sources
 * 
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development when possible:
 * 
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SESSION_SECRET` - signing secret for session tokens (required)
 * - `SESSION_TTL_SECS` - session lifetime in seconds (default: 30 days)
 * - `PROTECTED_PATHS` - comma-separated path prefixes behind the route
 *   guard (default: "/admin,/api/admin")
 * - `PRODUCTION` - "true" enables the Secure flag on the session cookie
 * - `SERVER_PORT` - listen port (default: 3000)
 * - `UPLOAD_DIR` - directory for uploaded images (default: "uploads")
 * 
 * # Error Handling
 * 
 * Missing `DATABASE_URL` or `SESSION_SECRET` is fatal: the credential store
 * and the token signer are hard collaborators, so the server refuses to
 * start without them instead of limping along.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Default session lifetime: 30 days
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Default protected path prefixes
pub const DEFAULT_PROTECTED_PATHS: &str = "/admin,/api/admin";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable has an unparseable value
    #[error("invalid value for {name}: {value}")]
    InvalidVar {
        /// Variable name
        name: &'static str,
        /// The offending value
        value: String,
    },
}

/// Immutable application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Signing secret for session tokens (process-wide, never rotated at runtime)
    pub session_secret: String,
    /// Session token lifetime in seconds
    pub session_ttl_secs: u64,
    /// Ordered path prefixes requiring a valid session
    pub protected_paths: Vec<String>,
    /// Production flag; enables the Secure attribute on the session cookie
    pub production: bool,
    /// Listen port for the HTTP server
    pub port: u16,
    /// Directory where uploaded images are stored
    pub upload_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if `DATABASE_URL` or `SESSION_SECRET` is
    /// missing, or if a numeric variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let session_secret = std::env::var("SESSION_SECRET")
            .map_err(|_| ConfigError::MissingVar("SESSION_SECRET"))?;

        let session_ttl_secs = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidVar {
                name: "SESSION_TTL_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        let protected_paths = parse_protected_paths(
            &std::env::var("PROTECTED_PATHS").unwrap_or_else(|_| DEFAULT_PROTECTED_PATHS.to_string()),
        );

        let production = std::env::var("PRODUCTION")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        tracing::info!(
            port,
            production,
            protected = ?protected_paths,
            "configuration loaded"
        );

        Ok(Self {
            database_url,
            session_secret,
            session_ttl_secs,
            protected_paths,
            production,
            port,
            upload_dir,
        })
    }
}

/// Parse a comma-separated list of path prefixes
/// 
/// Blank entries are dropped and entries are trimmed, so
/// `"/admin, /api/admin,"` parses the same as `"/admin,/api/admin"`.
/// Order is preserved; the route guard matches first-match-wins.
pub fn parse_protected_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_protected_paths() {
        assert_eq!(
            parse_protected_paths("/admin,/api/admin"),
            vec!["/admin".to_string(), "/api/admin".to_string()]
        );
    }

    #[test]
    fn test_parse_protected_paths_trims_and_drops_blanks() {
        assert_eq!(
            parse_protected_paths(" /admin , , /api/admin ,"),
            vec!["/admin".to_string(), "/api/admin".to_string()]
        );
    }

    #[test]
    fn test_parse_protected_paths_preserves_order() {
        assert_eq!(
            parse_protected_paths("/api/admin,/admin"),
            vec!["/api/admin".to_string(), "/admin".to_string()]
        );
    }

    #[test]
    fn test_default_paths_cover_admin() {
        let paths = parse_protected_paths(DEFAULT_PROTECTED_PATHS);
        assert!(paths.contains(&"/admin".to_string()));
        assert!(paths.contains(&"/api/admin".to_string()));
    }
}
