//! Image upload module
//!
//! A single local-disk upload endpoint for the admin area. Files land in
//! the configured uploads directory and are served back at `/uploads`.

/// Upload handler
pub mod handlers;

pub use handlers::{upload_image, MAX_UPLOAD_BYTES};
