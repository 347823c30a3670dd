//! Dataset traversal and per-image measurement
//!
//! Walks `dataset/<day>/<image>` in lexicographic order, segments every
//! decodable image and collects one [`MeasurementRecord`] per image.
//! Unreadable images are logged and skipped; they never abort a run.

use image::RgbImage;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::Path;

use super::metrics::PlantMetrics;
use super::table::{MeasurementRecord, ResultTable};
use crate::config::GrowthConfig;
use crate::dataset::{list_days, list_images, DayFolder};
use crate::error::Result;
use crate::image_loader::load_image;
use crate::segmentation::PlantSegmenter;

/// Growth analyzer driving segmentation over a day-partitioned dataset
#[derive(Debug, Clone, Default)]
pub struct GrowthAnalyzer {
    segmenter: PlantSegmenter,
    parallel: bool,
}

impl GrowthAnalyzer {
    /// Create an analyzer with default segmentation, running sequentially
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom segmenter
    pub fn with_segmenter(segmenter: PlantSegmenter) -> Self {
        Self {
            segmenter,
            parallel: false,
        }
    }

    /// Create an analyzer from configuration
    pub fn from_config(config: &GrowthConfig) -> Result<Self> {
        let segmenter = PlantSegmenter::from_config(&config.segmentation)?;
        Ok(Self::with_segmenter(segmenter).parallel(config.analysis.parallel))
    }

    /// Measure the images of each day on the rayon pool
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn segmenter(&self) -> &PlantSegmenter {
        &self.segmenter
    }

    /// Metrics of an already decoded image
    pub fn measure(&self, image: &RgbImage) -> PlantMetrics {
        PlantMetrics::from_mask(&self.segmenter.segment(image))
    }

    /// Load, segment and measure one image file
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::ImageLoadError` if the file cannot be decoded.
    pub fn measure_image(&self, path: &Path) -> Result<PlantMetrics> {
        let image = load_image(path)?;
        Ok(self.measure(&image))
    }

    /// Measure one file, turning a load failure into a warning
    fn measure_or_skip(&self, day: &str, path: &Path) -> Option<MeasurementRecord> {
        let name = path.file_name()?.to_str()?;
        match self.measure_image(path) {
            Ok(metrics) => {
                debug!(
                    "{}/{}: area={} height={}",
                    day, name, metrics.area, metrics.height
                );
                Some(MeasurementRecord::new(day, name, metrics))
            }
            Err(e) => {
                warn!("Could not read {}, skipping: {}", path.display(), e);
                None
            }
        }
    }

    fn measure_day(&self, day: &DayFolder) -> Result<Vec<MeasurementRecord>> {
        let images = list_images(&day.path)?;

        let records: Vec<MeasurementRecord> = if self.parallel {
            images
                .par_iter()
                .filter_map(|path| self.measure_or_skip(&day.label, path))
                .collect()
        } else {
            images
                .iter()
                .filter_map(|path| self.measure_or_skip(&day.label, path))
                .collect()
        };

        if !records.is_empty() {
            let n = records.len() as f64;
            let mean_area = records.iter().map(|r| r.area as f64).sum::<f64>() / n;
            let mean_height = records.iter().map(|r| r.height as f64).sum::<f64>() / n;
            info!(
                "{}: avg area={:.0}, avg height={:.0} (from {} images)",
                day.label,
                mean_area,
                mean_height,
                records.len()
            );
        }

        Ok(records)
    }

    /// Measure every image of the dataset without writing anything
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::IoError` if the dataset root or a day folder
    /// cannot be listed.
    pub fn collect(&self, dataset_root: &Path) -> Result<ResultTable> {
        let mut table = ResultTable::new();
        for day in list_days(dataset_root)? {
            info!("Processing {}...", day.label);
            table.extend(self.measure_day(&day)?);
        }
        Ok(table)
    }

    /// Measure the dataset and persist the table as CSV at `results_path`
    ///
    /// Parent directories of `results_path` are created. The file is written
    /// once, after the whole dataset has been traversed.
    pub fn analyze(&self, dataset_root: &Path, results_path: &Path) -> Result<ResultTable> {
        let table = self.collect(dataset_root)?;
        table.write_csv(results_path)?;
        info!(
            "Analysis complete: {} records saved to {}",
            table.len(),
            results_path.display()
        );
        Ok(table)
    }

    /// Reuse a persisted table when present, otherwise run [`GrowthAnalyzer::analyze`]
    pub fn load_or_analyze(&self, dataset_root: &Path, results_path: &Path) -> Result<ResultTable> {
        if results_path.is_file() {
            let table = ResultTable::read_csv(results_path)?;
            info!(
                "Loaded existing results: {} records from {}",
                table.len(),
                results_path.display()
            );
            return Ok(table);
        }
        self.analyze(dataset_root, results_path)
    }
}
