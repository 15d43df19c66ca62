//! Portfolio Content Module
//!
//! Public read surface and admin CRUD for the site's content: projects,
//! blog posts, skills, work history, and the single-row profile.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── mod.rs      - Module exports
//! ├── models.rs   - Row types and write payloads
//! ├── db.rs       - sqlx queries
//! └── handlers.rs - HTTP handlers (public + admin)
//! ```
//!
//! Public listings exclude unpublished rows; everything that mutates
//! content lives under `/api/admin` behind the route guard.

/// Row types and write payloads
pub mod models;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;
