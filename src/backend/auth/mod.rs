//! Authentication Module
//!
//! This module implements the credential-verification and route-protection
//! flow: password hashing, the credential store interface, session token
//! issuing/validation, and the route guard policy.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - Credential store interface (users table)
//! ├── password.rs - bcrypt hashing and verification
//! ├── service.rs  - Authenticator (email + password -> identity)
//! ├── sessions.rs - Session token issuing and validation (JWT)
//! ├── guard.rs    - Route guard policy (pure path/token decision)
//! ├── cookie.rs   - Session cookie construction
//! └── handlers/   - HTTP handlers (login, logout, me)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: credentials verified against the store, session token
//!    minted and set as an HTTP-only cookie
//! 2. **Guarded request**: the route guard validates the cookie's token
//!    before any protected path is reached; failures redirect to
//!    `/login?callbackUrl=<original-path>`
//! 3. **Logout**: cookie deletion; stateless tokens expire naturally
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; hashing happens only at seed time
//! - Session tokens are HS256-signed with a process-wide secret
//! - Every credential failure surfaces identically (no enumeration)
//! - No lockout or rate limiting (explicit non-goal)

/// Credential store interface
pub mod users;

/// Password hashing and verification
pub mod password;

/// Authenticator
pub mod service;

/// Session token issuing and validation
pub mod sessions;

/// Route guard policy
pub mod guard;

/// Session cookie construction
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use guard::{RouteDecision, RouteGuard};
pub use handlers::{get_me, login, logout};
pub use service::{authenticate, AuthenticatedUser};
pub use sessions::Sessions;
