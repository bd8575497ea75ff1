//! Color segmentation: per-pixel "is target color" masks.
//!
//! The detector only needs a [`Mask`] with the frame's extent; any
//! [`ColorSegmenter`] can be plugged in. [`HsvRange`] is the default,
//! thresholding an inclusive box in 8-bit HSV.

pub mod hsv;

pub use hsv::{rgb_to_hsv, HsvRange};

use crate::image::{ImageRgb8, Mask};

/// Produces a binary target-color mask with the same extent as the frame.
pub trait ColorSegmenter {
    fn segment(&self, image: &ImageRgb8) -> Mask;
}
