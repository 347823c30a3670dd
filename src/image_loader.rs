//! Image loading for dataset photographs
//!
//! This module provides a single entry point for decoding the photograph
//! formats accepted in a dataset (JPEG and PNG).
//!
//! ## Design
//!
//! All images are decoded with the `image` crate and converted to 8-bit RGB
//! (`RgbImage`). Grayscale and alpha-carrying files are expanded or flattened
//! to three channels. RGB is the single channel order used by the whole
//! pipeline; no BGR conversion happens anywhere.

use crate::constants::dataset::HIDDEN_PREFIX;
use crate::error::{GrowthError, Result};
use image::{ImageReader, RgbImage};
use std::path::Path;

/// Load an image from disk as 8-bit RGB
///
/// The container format is sniffed from the file contents, so a PNG saved
/// with a `.jpg` extension still decodes.
///
/// # Errors
///
/// Returns `GrowthError::ImageLoadError` if:
/// - File cannot be opened
/// - Contents are not a decodable image
///
/// # Example
///
/// ```rust,no_run
/// use plant_growth::image_loader::load_image;
/// use std::path::Path;
///
/// let img = load_image(Path::new("dataset/day1/plant.jpg"))?;
/// println!("Loaded image: {}x{}", img.width(), img.height());
/// # Ok::<(), plant_growth::GrowthError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| {
            GrowthError::image_load(format!("Failed to open image file: {}", path.display()), e)
        })?
        .with_guessed_format()
        .map_err(|e| {
            GrowthError::image_load(format!("Failed to read image file: {}", path.display()), e)
        })?;

    let img = reader.decode().map_err(|e| {
        GrowthError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgb8())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Check if a file or directory name is hidden
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

/// Check if a path names a visible file with a supported image extension
pub fn is_candidate_image(path: &Path) -> bool {
    let visible = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| !is_hidden(n))
        .unwrap_or(false);
    let supported = path
        .extension()
        .and_then(|e| e.to_str())
        .map(is_supported_extension)
        .unwrap_or(false);
    visible && supported
}
