//! Daily aggregation of a result table
//!
//! Groups rows by day label and computes count, mean and sample standard
//! deviation of area and height. Output is ordered by the numeric day key
//! parsed from the label, so `day2` sorts before `day10`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

use super::table::{ensure_parent_dir, ResultTable};
use crate::error::{GrowthError, Result};

/// Day label with its parsed trailing day number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayLabel {
    label: String,
    number: u32,
}

impl DayLabel {
    /// Parse the trailing decimal number of a day label
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidDayLabel` if the label does not end in an
    /// ASCII digit or the number does not fit in a `u32`.
    ///
    /// ```
    /// use plant_growth::DayLabel;
    ///
    /// assert_eq!(DayLabel::parse("day12")?.number(), 12);
    /// assert!(DayLabel::parse("baseline").is_err());
    /// # Ok::<(), plant_growth::GrowthError>(())
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let digits_start = label
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| GrowthError::InvalidDayLabel {
                label: label.to_string(),
            })?;

        let number = label[digits_start..]
            .parse::<u32>()
            .map_err(|_| GrowthError::InvalidDayLabel {
                label: label.to_string(),
            })?;

        Ok(Self {
            label: label.to_string(),
            number,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl Ord for DayLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for DayLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mean and sample standard deviation of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: f64,
    /// `None` with fewer than two samples
    pub std: Option<f64>,
}

impl MetricStats {
    /// Statistics of a non-empty sample
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let std = (samples.len() > 1).then(|| {
            let ss: f64 = samples.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        });
        Some(Self { mean, std })
    }
}

/// Per-day rollup consumed by charts and the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub day: String,
    pub day_number: u32,
    pub count: usize,
    pub area: MetricStats,
    pub height: MetricStats,
}

/// Group a table by day and compute per-day statistics
///
/// # Errors
///
/// Returns `GrowthError::InvalidDayLabel` if any day label lacks a trailing number.
pub fn aggregate_daily(table: &ResultTable) -> Result<Vec<DailyStats>> {
    let mut labeled = table
        .days()
        .into_iter()
        .map(|day| DayLabel::parse(day))
        .collect::<Result<Vec<_>>>()?;
    labeled.sort();

    let stats = labeled
        .into_iter()
        .filter_map(|day| {
            let (areas, heights): (Vec<f64>, Vec<f64>) = table
                .for_day(day.label())
                .map(|r| (r.area as f64, r.height as f64))
                .unzip();
            Some(DailyStats {
                day: day.label().to_string(),
                day_number: day.number(),
                count: areas.len(),
                area: MetricStats::from_samples(&areas)?,
                height: MetricStats::from_samples(&heights)?,
            })
        })
        .collect();

    Ok(stats)
}

/// Write daily statistics as pretty JSON, creating parent directories
pub fn write_daily_stats_json(stats: &[DailyStats], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(stats).map_err(|e| {
        GrowthError::ProcessingError(format!("Failed to serialize daily statistics: {}", e))
    })?;
    std::fs::write(path, json)
        .map_err(|e| GrowthError::io(format!("Failed to write {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{MeasurementRecord, PlantMetrics};

    fn table(rows: &[(&str, u64, u32)]) -> ResultTable {
        rows.iter()
            .enumerate()
            .map(|(i, &(day, area, height))| {
                MeasurementRecord::new(day, format!("{}.png", i), PlantMetrics { area, height })
            })
            .collect()
    }

    #[test]
    fn test_day_label_parsing() {
        assert_eq!(DayLabel::parse("day3").unwrap().number(), 3);
        assert_eq!(DayLabel::parse("week2_day014").unwrap().number(), 14);
        assert_eq!(DayLabel::parse("7").unwrap().number(), 7);
        assert!(matches!(
            DayLabel::parse("day"),
            Err(GrowthError::InvalidDayLabel { .. })
        ));
        assert!(DayLabel::parse("day3b").is_err());
        assert!(DayLabel::parse("").is_err());
        assert!(DayLabel::parse("day99999999999").is_err());
    }

    #[test]
    fn test_numeric_ordering() {
        let t = table(&[("day1", 1, 1), ("day10", 1, 1), ("day2", 1, 1)]);
        let days: Vec<String> = aggregate_daily(&t).unwrap().into_iter().map(|s| s.day).collect();
        assert_eq!(days, vec!["day1", "day2", "day10"]);
    }

    #[test]
    fn test_mean_and_sample_std() {
        let t = table(&[("day1", 2, 10), ("day1", 4, 20), ("day1", 6, 30)]);
        let stats = &aggregate_daily(&t).unwrap()[0];
        assert_eq!(stats.count, 3);
        assert!((stats.area.mean - 4.0).abs() < 1e-12);
        assert!((stats.area.std.unwrap() - 2.0).abs() < 1e-12);
        assert!((stats.height.mean - 20.0).abs() < 1e-12);
        assert!((stats.height.std.unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_has_no_std() {
        let t = table(&[("day4", 50, 5)]);
        let stats = aggregate_daily(&t).unwrap();
        assert_eq!(stats[0].day_number, 4);
        assert_eq!(stats[0].area.std, None);
    }

    #[test]
    fn test_malformed_label_fails_aggregation() {
        let t = table(&[("day1", 1, 1), ("control", 1, 1)]);
        assert!(matches!(
            aggregate_daily(&t),
            Err(GrowthError::InvalidDayLabel { label }) if label == "control"
        ));
    }

    #[test]
    fn test_empty_table() {
        assert!(aggregate_daily(&ResultTable::new()).unwrap().is_empty());
    }

    #[test]
    fn test_stats_json_shape() {
        let t = table(&[("day1", 10, 2)]);
        let stats = aggregate_daily(&t).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json[0]["day"], "day1");
        assert_eq!(json[0]["day_number"], 1);
        assert_eq!(json[0]["area"]["mean"], 10.0);
        assert!(json[0]["area"]["std"].is_null());
    }
}
