//! Binary morphology on [`Mask`]
//!
//! Operations run through `imageproc`'s grayscale morphology, which on a
//! 0/255 raster is exactly binary erosion and dilation. Pixels outside the
//! image never take part: erosion only looks at in-bounds neighbors and
//! dilation treats the outside as background, so a plant region touching the
//! frame edge keeps its extent through a closing or opening.

use image::{GrayImage, Luma};
use imageproc::morphology::{
    grayscale_close, grayscale_dilate, grayscale_erode, grayscale_open, Mask as Footprint,
};
use serde::{Deserialize, Serialize};

use super::mask::Mask;
use crate::constants::mask::{BACKGROUND, PLANT};
use crate::constants::morphology::{KERNEL_SIZE, MAX_KERNEL_SIZE};
use crate::error::{GrowthError, Result};

/// Structuring element shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KernelShape {
    /// Full square
    #[default]
    Rectangle,
    /// Center row and center column
    Cross,
    /// Disk inscribed in the square
    Ellipse,
}

impl KernelShape {
    /// Whether offset (dx, dy) from the anchor belongs to a shape of radius `r`
    fn covers(self, dx: i32, dy: i32, r: i32) -> bool {
        match self {
            KernelShape::Rectangle => true,
            KernelShape::Cross => dx == 0 || dy == 0,
            KernelShape::Ellipse => dx * dx + dy * dy <= r * r,
        }
    }
}

/// Square structuring element of odd size, anchored at its center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuringElement {
    shape: KernelShape,
    size: u32,
}

impl Default for StructuringElement {
    fn default() -> Self {
        Self {
            shape: KernelShape::Rectangle,
            size: KERNEL_SIZE,
        }
    }
}

impl StructuringElement {
    /// Build a structuring element
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidParameter` if `size` is zero, even or
    /// larger than 255.
    pub fn new(shape: KernelShape, size: u32) -> Result<Self> {
        if size == 0 || size % 2 == 0 || size > MAX_KERNEL_SIZE {
            return Err(GrowthError::invalid_parameter("kernel_size", size));
        }
        Ok(Self { shape, size })
    }

    /// Full `size`×`size` square
    pub fn rectangle(size: u32) -> Result<Self> {
        Self::new(KernelShape::Rectangle, size)
    }

    pub fn shape(&self) -> KernelShape {
        self.shape
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// The element drawn as a `size`×`size` image, covered cells set to plant
    pub fn kernel_image(&self) -> GrayImage {
        let r = (self.size / 2) as i32;
        GrayImage::from_fn(self.size, self.size, |x, y| {
            let covered = self.shape.covers(x as i32 - r, y as i32 - r, r);
            Luma([if covered { PLANT } else { BACKGROUND }])
        })
    }

    /// Number of cells covered by the element
    pub fn area(&self) -> usize {
        self.kernel_image().pixels().filter(|p| p.0[0] == PLANT).count()
    }

    fn footprint(&self) -> Footprint {
        // size <= MAX_KERNEL_SIZE keeps the anchor within u8
        let anchor = (self.size / 2) as u8;
        Footprint::from_image(&self.kernel_image(), anchor, anchor)
    }
}

/// Keep a pixel only when every covered neighbor is plant
pub fn erode(mask: &Mask, element: &StructuringElement) -> Mask {
    Mask::from_gray_image(grayscale_erode(mask.as_gray_image(), &element.footprint()))
}

/// Set a pixel when any covered neighbor is plant
pub fn dilate(mask: &Mask, element: &StructuringElement) -> Mask {
    Mask::from_gray_image(grayscale_dilate(mask.as_gray_image(), &element.footprint()))
}

/// Dilate then erode: fills holes smaller than the element
pub fn close(mask: &Mask, element: &StructuringElement) -> Mask {
    Mask::from_gray_image(grayscale_close(mask.as_gray_image(), &element.footprint()))
}

/// Erode then dilate: removes specks smaller than the element
pub fn open(mask: &Mask, element: &StructuringElement) -> Mask {
    Mask::from_gray_image(grayscale_open(mask.as_gray_image(), &element.footprint()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_mask(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> Mask {
        Mask::from_fn(w, h, |x, y| (x0..=x1).contains(&x) && (y0..=y1).contains(&y))
    }

    #[test]
    fn test_kernel_validation() {
        assert!(StructuringElement::rectangle(3).is_ok());
        assert!(StructuringElement::rectangle(1).is_ok());
        assert!(StructuringElement::rectangle(255).is_ok());
        assert!(matches!(
            StructuringElement::rectangle(4),
            Err(GrowthError::InvalidParameter { .. })
        ));
        assert!(StructuringElement::rectangle(0).is_err());
        assert!(StructuringElement::rectangle(257).is_err());
    }

    #[test]
    fn test_kernel_shapes() {
        assert_eq!(StructuringElement::rectangle(3).unwrap().area(), 9);
        assert_eq!(StructuringElement::new(KernelShape::Cross, 3).unwrap().area(), 5);
        assert_eq!(StructuringElement::new(KernelShape::Cross, 5).unwrap().area(), 9);
        // A 3x3 disk degenerates to the cross
        assert_eq!(StructuringElement::new(KernelShape::Ellipse, 3).unwrap().area(), 5);
        assert_eq!(StructuringElement::new(KernelShape::Ellipse, 1).unwrap().area(), 1);
    }

    #[test]
    fn test_open_removes_isolated_pixel() {
        let mut mask = rect_mask(20, 20, 5, 5, 14, 14);
        mask.set(1, 1, true);
        let opened = open(&mask, &StructuringElement::rectangle(3).unwrap());
        assert!(!opened.is_plant(1, 1));
        assert_eq!(opened.plant_pixel_count(), 100);
    }

    #[test]
    fn test_close_fills_small_hole() {
        let mut mask = rect_mask(20, 20, 5, 5, 14, 14);
        mask.set(9, 9, false);
        let closed = close(&mask, &StructuringElement::rectangle(3).unwrap());
        assert!(closed.is_plant(9, 9));
        assert_eq!(closed.plant_pixel_count(), 100);
    }

    #[test]
    fn test_region_touching_border_is_preserved() {
        let mask = rect_mask(10, 10, 0, 0, 4, 9);
        let element = StructuringElement::rectangle(3).unwrap();
        assert_eq!(open(&close(&mask, &element), &element), mask);
    }

    #[test]
    fn test_full_frame_survives_erosion() {
        let mask = Mask::from_fn(6, 4, |_, _| true);
        let eroded = erode(&mask, &StructuringElement::default());
        assert_eq!(eroded.plant_pixel_count(), 24);
    }

    #[test]
    fn test_erode_and_dilate_rectangle() {
        let mask = rect_mask(12, 12, 3, 3, 8, 8);
        let element = StructuringElement::rectangle(3).unwrap();
        assert_eq!(erode(&mask, &element).plant_pixel_count(), 16);
        assert_eq!(dilate(&mask, &element).plant_pixel_count(), 64);
    }

    #[test]
    fn test_cross_dilation_skips_corners() {
        let mut mask = Mask::new(5, 5);
        mask.set(2, 2, true);
        let dilated = dilate(&mask, &StructuringElement::new(KernelShape::Cross, 3).unwrap());
        assert_eq!(dilated.plant_pixel_count(), 5);
        assert!(dilated.is_plant(2, 1));
        assert!(!dilated.is_plant(1, 1));
    }

    #[test]
    fn test_results_stay_binary() {
        let mask = Mask::from_fn(9, 9, |x, y| (x * 3 + y) % 4 == 0);
        let element = StructuringElement::new(KernelShape::Ellipse, 5).unwrap();
        let cleaned = open(&close(&mask, &element), &element);
        assert!(cleaned.as_raw().iter().all(|&v| v == PLANT || v == BACKGROUND));
    }
}
