/// Preview texture generation
///
/// Decodes the selected file into an RGBA texture for the image widget.
/// Oversized images are downscaled so a 40-megapixel drop does not stall
/// the renderer. Decoding happens off the UI thread; a failure only means
/// no preview is shown, and the upload itself is never blocked on this.
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;

/// Longest edge of the preview texture
const MAX_PREVIEW_DIM: u32 = 1024;

/// Decode an image file into a preview texture.
///
/// # Arguments
/// * `path` - Path to the dropped or picked file
///
/// # Returns
/// * `Ok(handle)` - RGBA texture ready for the image widget
/// * `Err(String)` - Error message if reading or decoding fails
pub async fn load_preview(path: PathBuf) -> Result<Handle, String> {
    // Spawn blocking because image decoding is CPU-intensive
    tokio::task::spawn_blocking(move || load_preview_blocking(&path))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of preview decoding
fn load_preview_blocking(path: &Path) -> Result<Handle, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    let decoded = if decoded.width() > MAX_PREVIEW_DIM || decoded.height() > MAX_PREVIEW_DIM {
        decoded.resize(MAX_PREVIEW_DIM, MAX_PREVIEW_DIM, FilterType::Triangle)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    println!("🖼️  Preview ready: {}x{}", width, height);

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
