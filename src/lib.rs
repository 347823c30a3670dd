//! # Plant Growth
//!
//! A Rust crate for measuring plant growth from day-partitioned photographs.
//!
//! This library provides repeatable size measurement by:
//! - Segmenting green foliage with an HSV color band
//! - Cleaning the mask with morphological closing and opening
//! - Measuring projected area and vertical extent per image
//! - Persisting one CSV row per image and aggregating them per day
//!
//! ## Example
//!
//! ```rust,no_run
//! use plant_growth::{aggregate_daily, analyze_growth, GrowthSummary};
//! use std::path::Path;
//!
//! let table = analyze_growth(Path::new("dataset"), Path::new("models/results.csv"))?;
//! let daily = aggregate_daily(&table)?;
//! println!("{}", GrowthSummary::from_daily(&daily));
//! # Ok::<(), plant_growth::GrowthError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod constants;
pub mod color;
pub mod image_loader;
pub mod dataset;
pub mod segmentation;
pub mod config;
pub mod analysis;
pub mod preprocessing;
pub mod cache;

pub use error::{GrowthError, Result};
pub use config::{AnalysisConfig, GrowthConfig, PreprocessingConfig, SegmentationConfig};
pub use segmentation::{Mask, PlantSegmenter};
pub use analysis::{
    aggregate_daily, DailyStats, DayLabel, GrowthAnalyzer, GrowthClass, GrowthInsights,
    GrowthSummary, MeasurementRecord, PlantMetrics, ResultTable, Trend,
};
pub use cache::ResultCache;

/// Measure every image of a dataset and persist the result table
///
/// This is the main entry point. It walks `dataset_root/<day>/<image>` with
/// the default green band and 3×3 kernel, writes the CSV to `results_path`
/// (creating parent directories) and returns the table.
///
/// # Errors
///
/// Returns `GrowthError` if:
/// - The dataset root or a day folder cannot be listed
/// - The result file cannot be written
///
/// Unreadable images are skipped with a warning and never fail the run.
pub fn analyze_growth(dataset_root: &Path, results_path: &Path) -> Result<ResultTable> {
    GrowthAnalyzer::new().analyze(dataset_root, results_path)
}
