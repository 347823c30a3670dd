//! Headline growth indicators over a whole run
//!
//! Computed from [`DailyStats`] in numeric day order. Indicators that need a
//! division by a zero baseline, or a standard deviation no day provides, are
//! `None` instead of NaN or infinity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::{DailyStats, MetricStats};

/// Percent growth above which a metric counts as increasing (and below the
/// negated value as decreasing)
const TREND_THRESHOLD: f64 = 5.0;

/// Direction of a metric from the first to the last day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl Trend {
    fn from_growth(percent: f64) -> Self {
        if percent > TREND_THRESHOLD {
            Trend::Increasing
        } else if percent > -TREND_THRESHOLD {
            Trend::Stable
        } else {
            Trend::Decreasing
        }
    }
}

/// Rating of total area growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthClass {
    /// Above 20%
    Excellent,
    /// Above 10%
    Good,
    /// Above 0%
    Moderate,
    Poor,
}

impl GrowthClass {
    fn from_growth(percent: f64) -> Self {
        if percent > 20.0 {
            GrowthClass::Excellent
        } else if percent > 10.0 {
            GrowthClass::Good
        } else if percent > 0.0 {
            GrowthClass::Moderate
        } else {
            GrowthClass::Poor
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Run-level growth indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInsights {
    pub total_images: usize,
    pub days_analyzed: usize,
    /// Percent change of the mean from the first to the last day
    pub area_growth: Option<f64>,
    pub height_growth: Option<f64>,
    /// Total growth spread over the elapsed day steps; 0 for a single day
    pub avg_daily_area_change: Option<f64>,
    pub avg_daily_height_change: Option<f64>,
    /// Mean of daily standard deviations over mean of daily means, in percent
    pub area_cv: Option<f64>,
    pub height_cv: Option<f64>,
    /// `100 - (area_cv + height_cv) / 2`, floored at 0
    pub growth_consistency: Option<f64>,
    /// Percent change of the last day-over-day area step relative to the first
    pub growth_acceleration: f64,
    /// Composite of growth and variability, clamped to `0..=100`
    pub health_score: Option<f64>,
    pub area_trend: Option<Trend>,
    pub height_trend: Option<Trend>,
    /// First day reaching the largest mean
    pub max_area_day: Option<String>,
    pub max_height_day: Option<String>,
    pub growth_class: Option<GrowthClass>,
}

fn percent_growth(first: f64, last: f64) -> Option<f64> {
    (first != 0.0).then(|| (last - first) / first * 100.0)
}

fn first_to_last(values: &[f64]) -> Option<f64> {
    match (values.first(), values.last()) {
        (Some(&first), Some(&last)) => percent_growth(first, last),
        _ => None,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Coefficient of variation across days; days without a std are left out
fn coefficient_of_variation(
    daily: &[DailyStats],
    metric: impl Fn(&DailyStats) -> &MetricStats,
) -> Option<f64> {
    let mean_std = mean(daily.iter().filter_map(|d| metric(d).std))?;
    let mean_of_means = mean(daily.iter().map(|d| metric(d).mean))?;
    (mean_of_means != 0.0).then(|| mean_std / mean_of_means * 100.0)
}

fn max_day(daily: &[DailyStats], value: impl Fn(&DailyStats) -> f64) -> Option<String> {
    daily
        .iter()
        .fold(None, |best: Option<&DailyStats>, d| match best {
            Some(b) if value(b) >= value(d) => Some(b),
            _ => Some(d),
        })
        .map(|d| d.day.clone())
}

fn acceleration(areas: &[f64]) -> f64 {
    if areas.len() < 3 {
        return 0.0;
    }
    let early = areas[1] - areas[0];
    let late = areas[areas.len() - 1] - areas[areas.len() - 2];
    if early > 0.0 {
        (late - early) / early * 100.0
    } else {
        0.0
    }
}

impl GrowthInsights {
    pub fn from_daily(daily: &[DailyStats]) -> Self {
        let days = daily.len();
        let areas: Vec<f64> = daily.iter().map(|d| d.area.mean).collect();
        let heights: Vec<f64> = daily.iter().map(|d| d.height.mean).collect();

        let area_growth = first_to_last(&areas);
        let height_growth = first_to_last(&heights);

        let per_day = |g: f64| if days > 1 { g / (days - 1) as f64 } else { 0.0 };

        let area_cv = coefficient_of_variation(daily, |d| &d.area);
        let height_cv = coefficient_of_variation(daily, |d| &d.height);
        let variability = area_cv.zip(height_cv).map(|(a, h)| a + h);

        let health_score = area_growth
            .zip(height_growth)
            .zip(variability)
            .map(|((a, h), v)| (50.0 + (a + h) / 4.0 - v / 4.0).clamp(0.0, 100.0));

        Self {
            total_images: daily.iter().map(|d| d.count).sum(),
            days_analyzed: days,
            area_growth,
            height_growth,
            avg_daily_area_change: area_growth.map(per_day),
            avg_daily_height_change: height_growth.map(per_day),
            area_cv,
            height_cv,
            growth_consistency: variability.map(|v| (100.0 - v / 2.0).max(0.0)),
            growth_acceleration: acceleration(&areas),
            health_score,
            area_trend: area_growth.map(Trend::from_growth),
            height_trend: height_growth.map(Trend::from_growth),
            max_area_day: max_day(daily, |d| d.area.mean),
            max_height_day: max_day(daily, |d| d.height.mean),
            growth_class: area_growth.map(GrowthClass::from_growth),
        }
    }
}

fn write_percent(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{:<22} {:+.1}%", label, v),
        None => writeln!(f, "{:<22} n/a", label),
    }
}

impl fmt::Display for GrowthInsights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} images over {} days",
            self.total_images, self.days_analyzed
        )?;
        write_percent(f, "Area growth:", self.area_growth)?;
        write_percent(f, "Height growth:", self.height_growth)?;
        write_percent(f, "Avg daily area:", self.avg_daily_area_change)?;
        write_percent(f, "Avg daily height:", self.avg_daily_height_change)?;
        write_percent(f, "Growth acceleration:", Some(self.growth_acceleration))?;
        if let Some(c) = self.growth_consistency {
            writeln!(f, "{:<22} {:.1}", "Consistency:", c)?;
        }
        if let Some(h) = self.health_score {
            writeln!(f, "{:<22} {:.1}", "Health score:", h)?;
        }
        if let (Some(a), Some(h)) = (self.area_trend, self.height_trend) {
            writeln!(f, "{:<22} area {}, height {}", "Trend:", a, h)?;
        }
        if let (Some(a), Some(h)) = (&self.max_area_day, &self.max_height_day) {
            writeln!(f, "{:<22} area {}, height {}", "Peak day:", a, h)?;
        }
        if let Some(c) = self.growth_class {
            writeln!(f, "{:<22} {}", "Growth rate:", c)?;
        }
        Ok(())
    }
}
