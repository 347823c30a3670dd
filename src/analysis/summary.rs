//! Day-over-day growth summary
//!
//! Built from [`DailyStats`] already in numeric day order. Percent changes are
//! undefined (`None`) when the reference mean is zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::DailyStats;

/// Change of one metric's daily mean relative to the previous day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub absolute: f64,
    pub percent: Option<f64>,
}

impl Change {
    fn between(previous: f64, current: f64) -> Self {
        let absolute = current - previous;
        let percent = (previous != 0.0).then(|| absolute / previous * 100.0);
        Self { absolute, percent }
    }
}

/// One row of the growth report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    pub day: String,
    pub day_number: u32,
    pub area_mean: f64,
    pub height_mean: f64,
    /// `None` for the first day
    pub area_change: Option<Change>,
    pub height_change: Option<Change>,
    /// Mean rescaled so the smallest day is 0 and the largest is 100
    pub area_progress: Option<f64>,
    pub height_progress: Option<f64>,
}

/// Growth report over all days
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub days: Vec<DayProgress>,
    /// Percent growth from the first to the last day
    pub total_area_growth: Option<f64>,
    pub total_height_growth: Option<f64>,
}

fn normalized(values: &[f64]) -> Vec<Option<f64>> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| (span > 0.0).then(|| (v - min) / span * 100.0))
        .collect()
}

fn total_growth(values: &[f64]) -> Option<f64> {
    match (values.first(), values.last()) {
        (Some(&first), Some(&last)) if values.len() > 1 => Change::between(first, last).percent,
        _ => None,
    }
}

impl GrowthSummary {
    pub fn from_daily(daily: &[DailyStats]) -> Self {
        let areas: Vec<f64> = daily.iter().map(|d| d.area.mean).collect();
        let heights: Vec<f64> = daily.iter().map(|d| d.height.mean).collect();
        let area_progress = normalized(&areas);
        let height_progress = normalized(&heights);

        let days = daily
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let previous = i.checked_sub(1).map(|p| &daily[p]);
                DayProgress {
                    day: d.day.clone(),
                    day_number: d.day_number,
                    area_mean: d.area.mean,
                    height_mean: d.height.mean,
                    area_change: previous.map(|p| Change::between(p.area.mean, d.area.mean)),
                    height_change: previous.map(|p| Change::between(p.height.mean, d.height.mean)),
                    area_progress: area_progress[i],
                    height_progress: height_progress[i],
                }
            })
            .collect();

        Self {
            days,
            total_area_growth: total_growth(&areas),
            total_height_growth: total_growth(&heights),
        }
    }
}

fn format_change(change: Option<Change>) -> String {
    match change {
        None => String::new(),
        Some(Change {
            absolute,
            percent: Some(p),
        }) => format!("{:+.0} ({:+.1}%)", absolute, p),
        Some(Change { absolute, .. }) => format!("{:+.0}", absolute),
    }
}

impl fmt::Display for GrowthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:<12} {:<14} {:<18} {:<18}",
            "Day", "Area (avg)", "Height (avg)", "Area Change", "Height Change"
        )?;
        writeln!(f, "{}", "-".repeat(74))?;
        for d in &self.days {
            writeln!(
                f,
                "{:<8} {:<12.0} {:<14.0} {:<18} {:<18}",
                d.day,
                d.area_mean,
                d.height_mean,
                format_change(d.area_change),
                format_change(d.height_change)
            )?;
        }
        if let Some(g) = self.total_area_growth {
            writeln!(f, "Total area growth:   {:+.1}%", g)?;
        }
        if let Some(g) = self.total_height_growth {
            writeln!(f, "Total height growth: {:+.1}%", g)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::MetricStats;

    fn day(n: u32, area: f64, height: f64) -> DailyStats {
        DailyStats {
            day: format!("day{}", n),
            day_number: n,
            count: 1,
            area: MetricStats { mean: area, std: None },
            height: MetricStats { mean: height, std: None },
        }
    }

    #[test]
    fn test_changes_and_totals() {
        let daily = [day(1, 100.0, 10.0), day(2, 150.0, 12.0), day(3, 200.0, 15.0)];
        let summary = GrowthSummary::from_daily(&daily);
        assert_eq!(summary.days[0].area_change, None);

        let second = summary.days[1].area_change.unwrap();
        assert_eq!(second.absolute, 50.0);
        assert_eq!(second.percent, Some(50.0));

        assert_eq!(summary.total_area_growth, Some(100.0));
        assert_eq!(summary.total_height_growth, Some(50.0));
    }

    #[test]
    fn test_normalized_progress() {
        let daily = [day(1, 100.0, 10.0), day(2, 150.0, 10.0), day(3, 200.0, 10.0)];
        let summary = GrowthSummary::from_daily(&daily);
        let progress: Vec<Option<f64>> = summary.days.iter().map(|d| d.area_progress).collect();
        assert_eq!(progress, vec![Some(0.0), Some(50.0), Some(100.0)]);
        // Flat heights have no meaningful scale
        assert!(summary.days.iter().all(|d| d.height_progress.is_none()));
    }

    #[test]
    fn test_zero_baseline_has_no_percent() {
        let summary = GrowthSummary::from_daily(&[day(1, 0.0, 0.0), day(2, 40.0, 4.0)]);
        let change = summary.days[1].area_change.unwrap();
        assert_eq!(change.absolute, 40.0);
        assert_eq!(change.percent, None);
        assert_eq!(summary.total_area_growth, None);
    }

    #[test]
    fn test_single_day_and_empty() {
        let single = GrowthSummary::from_daily(&[day(1, 10.0, 1.0)]);
        assert_eq!(single.total_area_growth, None);
        assert!(GrowthSummary::from_daily(&[]).days.is_empty());
    }

    #[test]
    fn test_report_rendering() {
        let summary = GrowthSummary::from_daily(&[day(1, 100.0, 10.0), day(2, 150.0, 12.0)]);
        let text = summary.to_string();
        assert!(text.contains("day2"));
        assert!(text.contains("+50 (+50.0%)"));
        assert!(text.contains("Total area growth:   +50.0%"));
    }
}
