//! Per-image growth metrics derived from a mask

use serde::{Deserialize, Serialize};

use crate::segmentation::Mask;

/// Area and height of the plant in one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlantMetrics {
    /// Number of plant pixels
    pub area: u64,
    /// Rows between the topmost and bottommost plant pixel, inclusive; 0 for an empty mask
    pub height: u32,
}

impl PlantMetrics {
    pub fn from_mask(mask: &Mask) -> Self {
        let area = mask.plant_pixel_count();
        let height = mask
            .plant_row_span()
            .map(|(first, last)| last - first + 1)
            .unwrap_or(0);
        Self { area, height }
    }
}
