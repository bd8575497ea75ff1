//! 8-bit HSV conversion and inclusive range thresholding.
//!
//! Uses the common 8-bit convention: hue is halved into `[0, 180)`, saturation
//! and value are scaled to `[0, 255]`.
use super::ColorSegmenter;
use crate::image::{ImageRgb8, Mask};
use serde::Deserialize;

/// Convert one RGB pixel to 8-bit `[h, s, v]`.
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };
    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }
    let h = ((h / 2.0).round() as u32 % 180) as u8;
    [h, s.round() as u8, max as u8]
}

/// Inclusive HSV box, `lower[i] <= hsv[i] <= upper[i]` on every channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for HsvRange {
    /// Tuned for the blue gate bars.
    fn default() -> Self {
        Self {
            lower: [90, 50, 95],
            upper: [140, 255, 255],
        }
    }
}

impl HsvRange {
    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }

    #[inline]
    pub fn matches_rgb(&self, rgb: [u8; 3]) -> bool {
        self.contains(rgb_to_hsv(rgb))
    }
}

impl ColorSegmenter for HsvRange {
    fn segment(&self, image: &ImageRgb8) -> Mask {
        let data = image.pixels().map(|px| self.matches_rgb(px)).collect();
        Mask::from_vec(image.w, image.h, data).unwrap_or_else(|| Mask::new(image.w, image.h))
    }
}
