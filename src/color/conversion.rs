//! Color space conversion utilities
//!
//! Converts 8-bit RGB pixels to HSV on the compact 8-bit scale used by the
//! segmentation thresholds:
//! - Hue in degrees halved, `0..=179`
//! - Saturation and value scaled to `0..=255`
//!
//! Pixels are expected in RGB channel order as produced by
//! [`crate::image_loader::load_image`]. Feeding BGR data here swaps red and
//! blue before the hue is computed and shifts the effective green band.

use image::Rgb;
use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

use crate::constants::green_band;

/// HSV pixel on the 8-bit scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HsvPixel {
    /// Hue, `0..=179` (degrees / 2)
    pub h: u8,
    /// Saturation, `0..=255`
    pub s: u8,
    /// Value, `0..=255`
    pub v: u8,
}

impl HsvPixel {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Inclusive HSV box used for pixel classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// Default chlorophyll-green band
    pub const fn green() -> Self {
        Self {
            lower: [
                green_band::HUE_MIN,
                green_band::SATURATION_MIN,
                green_band::VALUE_MIN,
            ],
            upper: [
                green_band::HUE_MAX,
                green_band::SATURATION_MAX,
                green_band::VALUE_MAX,
            ],
        }
    }

    /// Check whether every channel lies inside its bounds
    #[inline]
    pub fn contains(&self, pixel: HsvPixel) -> bool {
        let channels = [pixel.h, pixel.s, pixel.v];
        channels
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(&c, (&lo, &hi))| lo <= c && c <= hi)
    }
}

impl Default for HsvRange {
    fn default() -> Self {
        Self::green()
    }
}

/// Stateless RGB to HSV converter
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert an 8-bit RGB pixel to HSV on the 8-bit scale
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - RGB values in range [0, 255]
    ///
    /// # Returns
    ///
    /// `HsvPixel` with hue halved to fit a byte. Achromatic pixels get hue 0.
    pub fn rgb_to_hsv(&self, r: u8, g: u8, b: u8) -> HsvPixel {
        let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        let hsv = Hsv::from_color(srgb);

        let degrees = hsv.hue.into_positive_degrees();
        let mut h = (degrees / 2.0).round() as u16;
        if h >= 180 {
            h -= 180;
        }
        let s = (hsv.saturation * 255.0).round().clamp(0.0, 255.0) as u8;
        let v = (hsv.value * 255.0).round().clamp(0.0, 255.0) as u8;

        HsvPixel::new(h as u8, s, v)
    }

    /// Convert an `image` crate RGB pixel
    #[inline]
    pub fn pixel_to_hsv(&self, pixel: &Rgb<u8>) -> HsvPixel {
        let [r, g, b] = pixel.0;
        self.rgb_to_hsv(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_green() {
        let converter = ColorConverter::new();
        let hsv = converter.rgb_to_hsv(0, 255, 0);
        assert_eq!(hsv, HsvPixel::new(60, 255, 255));
    }

    #[test]
    fn test_pure_red_and_blue() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hsv(255, 0, 0).h, 0);
        assert_eq!(converter.rgb_to_hsv(0, 0, 255).h, 120);
    }

    #[test]
    fn test_black_and_white_are_achromatic() {
        let converter = ColorConverter::new();
        let black = converter.rgb_to_hsv(0, 0, 0);
        assert_eq!(black.s, 0);
        assert_eq!(black.v, 0);

        let white = converter.rgb_to_hsv(255, 255, 255);
        assert_eq!(white.s, 0);
        assert_eq!(white.v, 255);
    }

    #[test]
    fn test_dark_green_value() {
        let converter = ColorConverter::new();
        let hsv = converter.rgb_to_hsv(0, 200, 0);
        assert_eq!(hsv.h, 60);
        assert_eq!(hsv.v, 200);
    }

    #[test]
    fn test_channel_order_matters() {
        // Swapping red and blue shifts the hue of the same physical color
        let converter = ColorConverter::new();
        let rgb = converter.rgb_to_hsv(120, 200, 20);
        let swapped = converter.rgb_to_hsv(20, 200, 120);
        assert!(HsvRange::green().contains(rgb));
        assert_ne!(rgb.h, swapped.h);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let range = HsvRange::green();
        assert!(range.contains(HsvPixel::new(35, 40, 40)));
        assert!(range.contains(HsvPixel::new(85, 255, 255)));
        assert!(!range.contains(HsvPixel::new(34, 255, 255)));
        assert!(!range.contains(HsvPixel::new(86, 255, 255)));
        assert!(!range.contains(HsvPixel::new(60, 39, 255)));
        assert!(!range.contains(HsvPixel::new(60, 255, 39)));
    }
}
