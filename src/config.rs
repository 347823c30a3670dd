//! Configuration structures for the plant_growth pipeline.
//!
//! This module defines all tunable parameters for a growth analysis run,
//! organized into groups for segmentation, preprocessing and analysis.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use plant_growth::GrowthConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = GrowthConfig::from_json_file(Path::new("growth.json"))?;
//!
//! // Or use defaults
//! let config = GrowthConfig::default();
//! # Ok::<(), plant_growth::GrowthError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`SegmentationConfig`]: HSV green band and morphology kernel
//! - [`PreprocessingConfig`]: resize-with-padding before analysis
//! - [`AnalysisConfig`]: parallelism and statistics output

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::HsvRange;
use crate::constants::{dataset, green_band, morphology, preprocessing};
use crate::error::{GrowthError, Result};
use crate::segmentation::KernelShape;

/// Complete configuration for a growth analysis run.
///
/// Can be serialized to/from JSON for reproducible experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Dataset root holding one folder per day
    pub dataset_path: PathBuf,

    /// Output CSV for the result table
    pub results_path: PathBuf,

    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Preprocessing configuration
    #[serde(default)]
    pub preprocessing: PreprocessingConfig,

    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Color thresholds and morphology kernel.
///
/// Bounds are inclusive and use the 8-bit HSV scale
/// (hue 0-179, saturation and value 0-255) applied to RGB-decoded pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    pub hue_min: u8,
    pub hue_max: u8,
    pub saturation_min: u8,
    pub saturation_max: u8,
    pub value_min: u8,
    pub value_max: u8,

    /// Structuring element size (odd)
    pub kernel_size: u32,

    /// Structuring element shape
    #[serde(default)]
    pub kernel_shape: KernelShape,
}

/// Resize-with-padding applied to dataset images before analysis.
///
/// Images are rewritten in place, so this is off by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessingConfig {
    /// Run the resize pass before analysis
    pub enabled: bool,

    pub target_width: u32,
    pub target_height: u32,

    /// Scale uniformly and pad with black instead of stretching
    pub keep_aspect_ratio: bool,
}

/// Analysis run options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Measure the images of a day on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Optional JSON output for per-day statistics
    #[serde(default)]
    pub stats_path: Option<PathBuf>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            hue_min: green_band::HUE_MIN,
            hue_max: green_band::HUE_MAX,
            saturation_min: green_band::SATURATION_MIN,
            saturation_max: green_band::SATURATION_MAX,
            value_min: green_band::VALUE_MIN,
            value_max: green_band::VALUE_MAX,
            kernel_size: morphology::KERNEL_SIZE,
            kernel_shape: KernelShape::Rectangle,
        }
    }
}

impl SegmentationConfig {
    /// Thresholds as an inclusive HSV box
    pub fn hsv_range(&self) -> HsvRange {
        HsvRange::new(
            [self.hue_min, self.saturation_min, self.value_min],
            [self.hue_max, self.saturation_max, self.value_max],
        )
    }

    /// Check bounds ordering, hue limit and kernel size
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("hue", self.hue_min, self.hue_max),
            ("saturation", self.saturation_min, self.saturation_max),
            ("value", self.value_min, self.value_max),
        ];
        for (name, lo, hi) in bounds {
            if lo > hi {
                return Err(GrowthError::invalid_parameter(
                    format!("segmentation.{}_min", name),
                    format!("{} (> {}_max {})", lo, name, hi),
                ));
            }
        }
        if self.hue_max > green_band::HUE_LIMIT {
            return Err(GrowthError::invalid_parameter(
                "segmentation.hue_max",
                self.hue_max,
            ));
        }
        if self.kernel_size == 0
            || self.kernel_size % 2 == 0
            || self.kernel_size > morphology::MAX_KERNEL_SIZE
        {
            return Err(GrowthError::invalid_parameter(
                "segmentation.kernel_size",
                self.kernel_size,
            ));
        }
        Ok(())
    }
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            target_width: preprocessing::TARGET_WIDTH,
            target_height: preprocessing::TARGET_HEIGHT,
            keep_aspect_ratio: true,
        }
    }
}

impl PreprocessingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(GrowthError::invalid_parameter("preprocessing.target_width", 0));
        }
        if self.target_height == 0 {
            return Err(GrowthError::invalid_parameter("preprocessing.target_height", 0));
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(dataset::DEFAULT_ROOT),
            results_path: PathBuf::from(dataset::DEFAULT_RESULTS_FILE),
            segmentation: SegmentationConfig::default(),
            preprocessing: PreprocessingConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl GrowthConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.segmentation.validate()?;
        self.preprocessing.validate()
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GrowthError::config(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| GrowthError::config(format!("Failed to parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GrowthError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| GrowthError::config(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }
}
