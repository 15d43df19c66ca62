//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Login handler (sets the session cookie)
//! ├── logout.rs   - Logout handler (clears the session cookie)
//! └── me.rs       - Get current user handler
//! ```
//!
//! There is intentionally no signup handler: identities are created by the
//! out-of-band seed binary, never through the HTTP surface.

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
