//! Image size normalization before analysis
//!
//! Resizes dataset images in place to a fixed frame. With aspect ratio
//! preservation the image is scaled uniformly to fit and centered on a black
//! canvas, so pixel areas stay comparable across cameras.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::{info, warn};
use std::path::Path;

use crate::config::PreprocessingConfig;
use crate::dataset::{list_days, list_images};
use crate::error::{GrowthError, Result};
use crate::image_loader::load_image;

/// Outcome of a resize pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeReport {
    pub resized: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for ResizeReport {
    fn add_assign(&mut self, other: Self) {
        self.resized += other.resized;
        self.skipped += other.skipped;
    }
}

/// Resize to `width`×`height`
///
/// When `keep_aspect_ratio` is set the image is scaled by
/// `min(width / w, height / h)` and pasted centered on black; otherwise it is
/// stretched. A zero target dimension yields an empty image.
pub fn resize_image(
    image: &RgbImage,
    width: u32,
    height: u32,
    keep_aspect_ratio: bool,
) -> RgbImage {
    if width == 0 || height == 0 {
        return RgbImage::new(width, height);
    }
    if !keep_aspect_ratio {
        return imageops::resize(image, width, height, FilterType::Triangle);
    }

    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    }

    let scale = f64::min(width as f64 / w as f64, height as f64 / h as f64);
    let new_w = ((w as f64 * scale) as u32).clamp(1, width);
    let new_h = ((h as f64 * scale) as u32).clamp(1, height);
    let resized = imageops::resize(image, new_w, new_h, FilterType::Triangle);

    let mut canvas = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::overlay(&mut canvas, &resized, x_offset as i64, y_offset as i64);
    canvas
}

/// Resize every eligible image of one folder in place
///
/// Uses the same file filter as the analyzer. Unreadable images are skipped
/// with a warning; a failed write is an error.
pub fn resize_folder(dir: &Path, config: &PreprocessingConfig) -> Result<ResizeReport> {
    config.validate()?;
    let mut report = ResizeReport::default();

    for path in list_images(dir)? {
        let image = match load_image(&path) {
            Ok(image) => image,
            Err(e) => {
                warn!("Could not read {}, skipping: {}", path.display(), e);
                report.skipped += 1;
                continue;
            }
        };

        let resized = resize_image(
            &image,
            config.target_width,
            config.target_height,
            config.keep_aspect_ratio,
        );
        resized.save(&path).map_err(|e| {
            GrowthError::ProcessingError(format!("Failed to save {}: {}", path.display(), e))
        })?;
        report.resized += 1;
    }

    info!(
        "Resized {} images in {} to {}x{}",
        report.resized,
        dir.display(),
        config.target_width,
        config.target_height
    );
    Ok(report)
}

/// Resize all day folders of a dataset
pub fn resize_dataset(root: &Path, config: &PreprocessingConfig) -> Result<ResizeReport> {
    let mut report = ResizeReport::default();
    for day in list_days(root)? {
        report += resize_folder(&day.path, config)?;
    }
    Ok(report)
}
