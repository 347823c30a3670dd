//! Default thresholds and reference values for growth measurement
//!
//! This module contains compile-time defaults for segmentation, dataset
//! layout and preprocessing. Every value here can be overridden through
//! [`crate::GrowthConfig`].

/// Green foliage band in 8-bit HSV (OpenCV scale: H in 0..=179, S/V in 0..=255)
///
/// Isolates chlorophyll green from soil, background and blown-out highlights.
pub mod green_band {
    /// Lower hue bound (about 70 degrees)
    pub const HUE_MIN: u8 = 35;

    /// Upper hue bound (about 170 degrees)
    pub const HUE_MAX: u8 = 85;

    /// Minimum saturation; rejects grey soil and pots
    pub const SATURATION_MIN: u8 = 40;
    pub const SATURATION_MAX: u8 = 255;

    /// Minimum value; rejects deep shadow
    pub const VALUE_MIN: u8 = 40;
    pub const VALUE_MAX: u8 = 255;

    /// Largest hue on the 8-bit scale
    pub const HUE_LIMIT: u8 = 179;
}

/// Morphological cleanup parameters
pub mod morphology {
    /// Default structuring element edge length
    pub const KERNEL_SIZE: u32 = 3;

    /// Largest accepted structuring element edge length
    pub const MAX_KERNEL_SIZE: u32 = 255;
}

/// Mask pixel levels
pub mod mask {
    /// Plant pixel value
    pub const PLANT: u8 = 255;

    /// Background pixel value
    pub const BACKGROUND: u8 = 0;
}

/// Dataset layout conventions
pub mod dataset {
    /// Default dataset root
    pub const DEFAULT_ROOT: &str = "dataset";

    /// Default persisted result table
    pub const DEFAULT_RESULTS_FILE: &str = "models/results.csv";

    /// File names starting with this character are hidden
    pub const HIDDEN_PREFIX: char = '.';

    /// Result table header columns
    pub const CSV_HEADER: [&str; 4] = ["day", "image", "area", "height"];
}

/// Preprocessing (resize with padding) defaults
pub mod preprocessing {
    pub const TARGET_WIDTH: u32 = 512;
    pub const TARGET_HEIGHT: u32 = 512;
}

/// Dashboard data cache
pub mod cache {
    use std::time::Duration;

    /// Time-to-live of cached analysis results
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_band_ranges() {
        assert!(green_band::HUE_MIN < green_band::HUE_MAX);
        assert!(green_band::HUE_MAX <= green_band::HUE_LIMIT);
        assert!(green_band::SATURATION_MIN < green_band::SATURATION_MAX);
        assert!(green_band::VALUE_MIN < green_band::VALUE_MAX);
    }

    #[test]
    fn test_kernel_is_odd() {
        assert_eq!(morphology::KERNEL_SIZE % 2, 1);
        assert_eq!(morphology::MAX_KERNEL_SIZE % 2, 1);
    }

    #[test]
    fn test_mask_levels_distinct() {
        assert_ne!(mask::PLANT, mask::BACKGROUND);
    }
}
