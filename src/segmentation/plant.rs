//! Plant foliage segmentation
//!
//! Implements plant detection that:
//! - Classifies pixels by a fixed green band in HSV space
//! - Fills small holes inside foliage with a morphological closing
//! - Strips isolated speckles with a morphological opening
//! - Returns a binary mask with the same dimensions as the input
//!
//! Closing runs before opening so that thin gaps inside a leaf are bridged
//! before small components are discarded.

use image::RgbImage;

use super::mask::Mask;
use super::morphology::{close, open, StructuringElement};
use crate::color::{ColorConverter, HsvRange};
use crate::config::SegmentationConfig;
use crate::constants::green_band::HUE_LIMIT;
use crate::error::{GrowthError, Result};

/// Color-threshold plant segmenter
#[derive(Debug, Clone)]
pub struct PlantSegmenter {
    converter: ColorConverter,
    range: HsvRange,
    element: StructuringElement,
}

impl Default for PlantSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantSegmenter {
    /// Create a segmenter with the default green band and a 3x3 rectangle
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
            range: HsvRange::green(),
            element: StructuringElement::default(),
        }
    }

    /// Create a segmenter with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidParameter` if:
    /// - Any lower bound exceeds its upper bound
    /// - The hue upper bound exceeds 179
    pub fn with_params(range: HsvRange, element: StructuringElement) -> Result<Self> {
        for (channel, (lo, hi)) in ["hue", "saturation", "value"]
            .iter()
            .zip(range.lower.iter().zip(range.upper.iter()))
        {
            if lo > hi {
                return Err(GrowthError::invalid_parameter(
                    format!("{}_range", channel),
                    format!("{}..={}", lo, hi),
                ));
            }
        }
        if range.upper[0] > HUE_LIMIT {
            return Err(GrowthError::invalid_parameter("hue_max", range.upper[0]));
        }

        Ok(Self {
            converter: ColorConverter::new(),
            range,
            element,
        })
    }

    /// Create a segmenter from configuration
    pub fn from_config(config: &SegmentationConfig) -> Result<Self> {
        let element = StructuringElement::new(config.kernel_shape, config.kernel_size)?;
        Self::with_params(config.hsv_range(), element)
    }

    pub fn range(&self) -> HsvRange {
        self.range
    }

    pub fn element(&self) -> &StructuringElement {
        &self.element
    }

    /// Raw color classification without morphological cleanup
    pub fn classify(&self, image: &RgbImage) -> Mask {
        Mask::from_fn(image.width(), image.height(), |x, y| {
            let hsv = self.converter.pixel_to_hsv(image.get_pixel(x, y));
            self.range.contains(hsv)
        })
    }

    /// Segment plant pixels from an RGB image
    ///
    /// # Arguments
    ///
    /// * `image` - RGB photograph (channel order as decoded by `image`)
    ///
    /// # Returns
    ///
    /// `Mask` with identical dimensions, plant pixels set to 255
    pub fn segment(&self, image: &RgbImage) -> Mask {
        let raw = self.classify(image);
        let closed = close(&raw, &self.element);
        open(&closed, &self.element)
    }
}
