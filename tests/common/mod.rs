//! Shared fixtures for integration tests

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

pub const LEAF: Rgb<u8> = Rgb([30, 180, 40]);
pub const SOIL: Rgb<u8> = Rgb([0, 0, 0]);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh scratch directory, removed on drop
pub struct Scratch {
    root: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "plant_growth_it_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create `dataset/<day>` and return its path
    pub fn day(&self, label: &str) -> PathBuf {
        let dir = self.root.join("dataset").join(label);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn dataset(&self) -> PathBuf {
        self.root.join("dataset")
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// `width`x`height` soil frame with a leaf block spanning columns `cols` and rows `rows`
pub fn plant_image(
    width: u32,
    height: u32,
    cols: std::ops::Range<u32>,
    rows: std::ops::Range<u32>,
) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if cols.contains(&x) && rows.contains(&y) {
            LEAF
        } else {
            SOIL
        }
    })
}
