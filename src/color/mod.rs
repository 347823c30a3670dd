//! Color conversion module
//!
//! This module handles RGB to HSV conversion and the inclusive HSV range
//! test used to classify foliage pixels.

pub mod conversion;

pub use conversion::{ColorConverter, HsvPixel, HsvRange};
