/**
 * Image Upload Handler
 * 
 * This module implements POST /api/admin/upload: a multipart form with a
 * single `file` part, saved to the configured local uploads directory.
 * 
 * # Validation
 * 
 * - Extension allow-list (png, jpg, jpeg, webp, gif, svg)
 * - Size cap of 5 MiB
 * - Stored under a fresh UUID filename, so uploads can never clobber each
 *   other or traverse out of the uploads directory
 * 
 * Saved files are served back by the static route mounted at `/uploads`.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AdminUser;
use crate::backend::server::state::AppState;

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Extensions accepted for image uploads
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg"];

/// Upload response
#[derive(Serialize, Debug)]
pub struct UploadResponse {
    /// Public URL of the stored file
    pub url: String,
}

/// Image upload handler
/// 
/// # Errors
/// 
/// * `400 Bad Request` - missing `file` part, disallowed extension,
///   oversized payload, or malformed multipart body
/// * `500 Internal Server Error` - filesystem write failure
pub async fn upload_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, BackendError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BackendError::upload(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| BackendError::upload("file part must carry a filename"))?;
        let extension = validate_extension(&original_name)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| BackendError::upload(format!("failed to read upload: {e}")))?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(BackendError::upload("file exceeds the 5 MiB limit"));
        }
        if data.is_empty() {
            return Err(BackendError::upload("file is empty"));
        }

        let stored_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);
        let path = state.config.upload_dir.join(&stored_name);
        tokio::fs::write(&path, &data).await.map_err(|e| {
            tracing::error!("Failed to store upload at {:?}: {:?}", path, e);
            BackendError::internal("failed to store upload")
        })?;

        tracing::info!("Stored upload {} ({} bytes)", stored_name, data.len());
        return Ok(Json(UploadResponse {
            url: format!("/uploads/{stored_name}"),
        }));
    }

    Err(BackendError::upload("no file part in request"))
}

/// Check the filename against the extension allow-list
/// 
/// Returns the lowercased extension to use for the stored name.
fn validate_extension(filename: &str) -> Result<String, BackendError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .ok_or_else(|| BackendError::upload("file has no extension"))?;

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(BackendError::upload(format!(
            "extension .{extension} is not allowed"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions_pass() {
        assert_eq!(validate_extension("photo.png").unwrap(), "png");
        assert_eq!(validate_extension("photo.JPG").unwrap(), "jpg");
        assert_eq!(validate_extension("archive.tar.svg").unwrap(), "svg");
    }

    #[test]
    fn test_disallowed_extensions_fail() {
        assert!(validate_extension("script.exe").is_err());
        assert!(validate_extension("page.html").is_err());
        assert!(validate_extension("noextension").is_err());
    }
}
