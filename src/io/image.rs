//! Loading source images and exporting rendered or original images as PNG

use crate::io::error::{PuzzleError, Result};
use image::RgbaImage;
use std::path::Path;

/// Load a puzzle source image from disk as RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_source_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| PuzzleError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgba8())
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns an error if directory creation fails
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
