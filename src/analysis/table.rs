//! Measurement records and the persisted result table
//!
//! The table is stored as CSV with a `day,image,area,height` header, written
//! and parsed with the `csv` crate through the serde derives on
//! [`MeasurementRecord`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::metrics::PlantMetrics;
use crate::constants::dataset::CSV_HEADER;
use crate::error::{GrowthError, Result};

/// One measured image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Day folder name
    pub day: String,
    /// Image file name within the day folder
    pub image: String,
    pub area: u64,
    pub height: u32,
}

impl MeasurementRecord {
    pub fn new(day: impl Into<String>, image: impl Into<String>, metrics: PlantMetrics) -> Self {
        Self {
            day: day.into(),
            image: image.into(),
            area: metrics.area,
            height: metrics.height,
        }
    }

    pub fn metrics(&self) -> PlantMetrics {
        PlantMetrics {
            area: self.area,
            height: self.height,
        }
    }
}

/// Ordered measurements of a run, one row per processed image
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultTable {
    records: Vec<MeasurementRecord>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MeasurementRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeasurementRecord> {
        self.records.iter()
    }

    /// Distinct day labels in first-seen order
    pub fn days(&self) -> Vec<&str> {
        let mut days: Vec<&str> = Vec::new();
        for record in &self.records {
            if !days.contains(&record.day.as_str()) {
                days.push(&record.day);
            }
        }
        days
    }

    /// Rows of a single day
    pub fn for_day<'a>(
        &'a self,
        day: &'a str,
    ) -> impl Iterator<Item = &'a MeasurementRecord> + 'a {
        self.records.iter().filter(move |r| r.day == day)
    }

    /// Render as CSV text including the header row
    ///
    /// Header is always written, so an empty table renders as the header line.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(CSV_HEADER).map_err(csv_error)?;
        for record in &self.records {
            writer.serialize(record).map_err(csv_error)?;
        }
        let bytes = writer.into_inner().map_err(|e| {
            GrowthError::ProcessingError(format!("Failed to flush result table: {}", e))
        })?;
        String::from_utf8(bytes)
            .map_err(|e| GrowthError::ProcessingError(format!("Result table is not UTF-8: {}", e)))
    }

    /// Parse CSV text produced by [`ResultTable::to_csv_string`]
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::TableFormatError` on a wrong header, a wrong
    /// field count or a non-numeric metric.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let header = reader.headers().map_err(csv_error)?;
        if header.iter().ne(CSV_HEADER) {
            return Err(GrowthError::TableFormatError {
                line: 1,
                reason: format!("expected header {:?}, found {:?}", CSV_HEADER, header),
            });
        }

        reader
            .deserialize::<MeasurementRecord>()
            .map(|row| row.map_err(csv_error))
            .collect()
    }

    /// Write the table as CSV, creating parent directories and replacing any existing file
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        fs::write(path, self.to_csv_string()?)
            .map_err(|e| GrowthError::io(format!("Failed to write {}", path.display()), e))
    }

    /// Read a table previously written with [`ResultTable::write_csv`]
    pub fn read_csv(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| GrowthError::io(format!("Failed to read {}", path.display()), e))?;
        Self::from_csv_str(&text)
    }
}

impl FromIterator<MeasurementRecord> for ResultTable {
    fn from_iter<I: IntoIterator<Item = MeasurementRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<MeasurementRecord> for ResultTable {
    fn extend<I: IntoIterator<Item = MeasurementRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a MeasurementRecord;
    type IntoIter = std::slice::Iter<'a, MeasurementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Create the parent directory of `path` if it has one
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| GrowthError::io(format!("Failed to create {}", parent.display()), e))?;
        }
    }
    Ok(())
}

/// Map a csv error to a table format error at the offending line
fn csv_error(e: csv::Error) -> GrowthError {
    let line = e.position().map_or(1, |p| p.line() as usize);
    GrowthError::TableFormatError {
        line,
        reason: e.to_string(),
    }
}
