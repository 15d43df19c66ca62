//! Backend Module
//!
//! This module contains all server-side code for the folio application:
//! the public portfolio API, the authenticated admin dashboard API, and
//! the authentication flow that gates it.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, session tokens, route guard
//! - **`content`** - Portfolio content models, queries, handlers
//! - **`upload`** - Image upload endpoint
//! - **`middleware`** - Route guard middleware
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and route guard
//! ├── content/        - Portfolio content CRUD
//! ├── upload/         - Image upload
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every request passes through the route guard middleware. Requests to a
//! protected prefix (`/admin`, `/api/admin` by default) must carry a valid
//! session cookie or they are redirected to the login page with the
//! original path in `callbackUrl`. Everything else passes through.
//!
//! # State Management
//!
//! `AppState` holds the database pool, the session signer, the route
//! guard, and the immutable configuration. None of it is mutable after
//! startup; handlers share no in-memory mutable state and the database is
//! the only shared resource.
//!
//! # Error Handling
//!
//! `BackendError` converts directly to HTTP responses. Credential and
//! session failures use deliberately uniform bodies so responses cannot be
//! used to probe which check failed.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and route guard
pub mod auth;

/// Portfolio content
pub mod content;

/// Image upload
pub mod upload;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
