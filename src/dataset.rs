//! Day-partitioned dataset layout
//!
//! A dataset is a directory of day folders, each holding photographs:
//!
//! ```text
//! dataset/
//!   day1/  a.jpg  b.png
//!   day2/  c.jpeg
//! ```
//!
//! Listing is always lexicographic by name so that runs are reproducible.
//! Hidden entries (leading `.`) are skipped at both levels. Entries whose
//! names are not valid UTF-8 cannot be labelled and are skipped with a warning.

use crate::error::{GrowthError, Result};
use crate::image_loader::{is_candidate_image, is_hidden};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// One observation day folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFolder {
    /// Folder name, used verbatim as the day label
    pub label: String,
    pub path: PathBuf,
}

/// Visible entries of `dir` with UTF-8 names, sorted by name
fn sorted_entries(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let reader = fs::read_dir(dir)
        .map_err(|e| GrowthError::io(format!("Failed to list {}", dir.display()), e))?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry =
            entry.map_err(|e| GrowthError::io(format!("Failed to list {}", dir.display()), e))?;
        let path = entry.path();
        match entry.file_name().into_string() {
            Ok(name) if is_hidden(&name) => debug!("Skipping hidden entry {}", path.display()),
            Ok(name) => entries.push((name, path)),
            Err(_) => warn!("Skipping entry with a non UTF-8 name: {}", path.display()),
        }
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// List day folders directly below `root` in lexicographic order
///
/// Regular files at the root level and hidden folders are ignored.
pub fn list_days(root: &Path) -> Result<Vec<DayFolder>> {
    Ok(sorted_entries(root)?
        .into_iter()
        .filter(|(_, path)| path.is_dir())
        .map(|(label, path)| DayFolder { label, path })
        .collect())
}

/// List candidate image files of a day folder in lexicographic order
///
/// Keeps regular files whose extension is jpg, jpeg or png (any case).
pub fn list_images(day_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(sorted_entries(day_dir)?
        .into_iter()
        .filter(|(_, path)| {
            let keep = path.is_file() && is_candidate_image(path);
            if !keep {
                debug!("Skipping non-image entry {}", path.display());
            }
            keep
        })
        .map(|(_, path)| path)
        .collect())
}
