//! Binary plant/background mask

use crate::constants::mask::{BACKGROUND, PLANT};
use image::{GrayImage, Luma};

/// Binary raster, one 8-bit level per pixel, either [`PLANT`] or [`BACKGROUND`]
///
/// Backed by a `GrayImage` so morphology can run on it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    /// All-background mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, Luma([BACKGROUND])),
        }
    }

    /// Build a mask by evaluating `is_plant` at every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut is_plant: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        Self {
            image: GrayImage::from_fn(width, height, |x, y| {
                Luma([if is_plant(x, y) { PLANT } else { BACKGROUND }])
            }),
        }
    }

    /// Wrap a grayscale image, mapping every non-zero level to plant
    pub fn from_gray_image(mut image: GrayImage) -> Self {
        for Luma([level]) in image.pixels_mut() {
            *level = if *level == BACKGROUND { BACKGROUND } else { PLANT };
        }
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether the pixel at (x, y) is plant. Panics when out of bounds.
    #[inline]
    pub fn is_plant(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y).0[0] == PLANT
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, plant: bool) {
        self.image
            .put_pixel(x, y, Luma([if plant { PLANT } else { BACKGROUND }]));
    }

    /// Row `y` as raw levels
    pub fn row(&self, y: u32) -> &[u8] {
        let width = self.width() as usize;
        let start = y as usize * width;
        &self.image.as_raw()[start..start + width]
    }

    /// Raw levels in row-major order
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_gray_image(&self) -> &GrayImage {
        &self.image
    }

    /// Number of plant pixels
    pub fn plant_pixel_count(&self) -> u64 {
        self.as_raw().iter().filter(|&&v| v == PLANT).count() as u64
    }

    /// First and last row index holding at least one plant pixel
    pub fn plant_row_span(&self) -> Option<(u32, u32)> {
        let has_plant = |y: &u32| self.row(*y).contains(&PLANT);
        let first = (0..self.height()).find(has_plant)?;
        let last = (0..self.height()).rev().find(has_plant)?;
        Some((first, last))
    }

    /// Convert to an 8-bit grayscale image for inspection or saving
    pub fn to_gray_image(&self) -> GrayImage {
        self.image.clone()
    }
}
