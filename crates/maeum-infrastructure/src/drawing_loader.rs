//! Loads drawings from disk.

use std::path::Path;

use maeum_core::upload::UploadedDrawing;
use maeum_core::{MaeumError, Result};

/// Reads one image file.
///
/// The MIME type is guessed from the extension; anything that is not
/// `image/*` is rejected.
pub async fn load_drawing(path: impl AsRef<Path>) -> Result<UploadedDrawing> {
    let path = path.as_ref();

    let mime_type = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .filter(|mime| mime.starts_with("image/"))
        .ok_or_else(|| {
            MaeumError::invalid_input(format!("Not an image file: {}", path.display()))
        })?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MaeumError::invalid_input(format!("Invalid file name: {:?}", path)))?
        .to_string();

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        MaeumError::io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    tracing::debug!(file = %name, mime = %mime_type, size = bytes.len(), "drawing loaded");
    Ok(UploadedDrawing::new(name, mime_type, bytes))
}

/// Reads several image files in order, stopping at the first failure.
pub async fn load_drawings<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<UploadedDrawing>> {
    let mut drawings = Vec::with_capacity(paths.len());
    for path in paths {
        drawings.push(load_drawing(path).await?);
    }
    Ok(drawings)
}
