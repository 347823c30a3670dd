//! Growth analysis module
//!
//! This module walks a day-partitioned dataset, measures plant area and
//! height per image, persists the result table, and rolls the table up into
//! per-day statistics, a growth summary and run-level growth indicators.

pub mod aggregate;
pub mod analyzer;
pub mod insights;
pub mod metrics;
pub mod summary;
pub mod table;

pub use aggregate::{
    aggregate_daily, write_daily_stats_json, DailyStats, DayLabel, MetricStats,
};
pub use analyzer::GrowthAnalyzer;
pub use insights::{GrowthClass, GrowthInsights, Trend};
pub use metrics::PlantMetrics;
pub use summary::{Change, DayProgress, GrowthSummary};
pub use table::{MeasurementRecord, ResultTable};
