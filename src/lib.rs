//! folio - Portfolio Site Backend
//!
//! folio is the backend for a personal portfolio website with a paired
//! administrative dashboard. The public API serves biography, skills,
//! projects, blog posts, and work history; the admin API manages that
//! same content and is gated by a cookie-based session flow.
//!
//! # Module Structure
//!
//! - **`backend`** - the Axum HTTP server
//!   - Authentication (bcrypt + signed session tokens + route guard)
//!   - Portfolio content CRUD backed by PostgreSQL
//!   - Local-disk image upload
//!
//! # Usage
//!
//! ```rust,no_run
//! use folio::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (app, _config) = create_app().await?;
//! // Serve `app` with axum::serve
//! # let _ = app;
//! # Ok(())
//! # }
//! ```
//!
//! # Binaries
//!
//! - `folio-server` - the HTTP server
//! - `folio-seed` - out-of-band admin identity seeding (the only way an
//!   identity is ever created)

/// Server-side code
pub mod backend;
