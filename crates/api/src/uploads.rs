//! Multipart photo upload handling.
//!
//! Uploaded files are sniffed with the `image` crate's header-only format
//! detection, stored under the media root with a UUID filename, and the
//! relative path (`actors_photos/<uuid>.<ext>`) is returned for persisting
//! on the owning row.

use std::path::Path;

use axum::extract::Multipart;
use uuid::Uuid;

use crate::error::AppError;

/// Subdirectory of the media root for actor photos.
pub const ACTOR_PHOTOS_DIR: &str = "actors_photos";

/// Subdirectory of the media root for user photos.
pub const USER_PHOTOS_DIR: &str = "users_photos";

/// Read the first file field from a multipart body, validate it is an
/// image, and store it under `media_root/subdir/`.
///
/// Returns the relative path of the stored file.
pub async fn save_photo(
    media_root: &Path,
    subdir: &str,
    multipart: &mut Multipart,
) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Skip plain form fields; only file parts carry a filename.
        if field.file_name().is_none() {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let format = image::guess_format(&data).map_err(|_| {
            AppError::BadRequest("Uploaded file is not a recognized image".to_string())
        })?;
        let extension = format.extensions_str().first().copied().unwrap_or("bin");

        let filename = format!("{}.{extension}", Uuid::new_v4());
        let dir = media_root.join(subdir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create media dir: {e}")))?;
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store photo: {e}")))?;

        return Ok(format!("{subdir}/{filename}"));
    }

    Err(AppError::BadRequest(
        "No photo file in multipart upload".to_string(),
    ))
}
