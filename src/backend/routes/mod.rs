//! Route Configuration Module
//!
//! Assembles the HTTP routing table.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Public API routes (auth, content reads)
//! └── admin_routes.rs - Admin API routes (CRUD, upload)
//! ```

/// Main router creation
pub mod router;

/// Public API route configuration
pub mod api_routes;

/// Admin API route configuration
pub mod admin_routes;

pub use router::create_router;
