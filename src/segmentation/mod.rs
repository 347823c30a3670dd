//! Plant segmentation module
//!
//! This module turns an RGB photograph into a binary plant/background mask:
//! HSV color thresholding followed by morphological closing and opening.

pub mod mask;
pub mod morphology;
pub mod plant;

pub use mask::Mask;
pub use morphology::{KernelShape, StructuringElement};
pub use plant::PlantSegmenter;
