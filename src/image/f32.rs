//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! The edge detector works on luma values in `[0, 1]` stored here.
use super::ImageRgb8;

#[derive(Clone, Debug)]
pub struct ImageF32 {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// All-zero `w × h` image.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Rec. 601 luma of an RGB frame, scaled to `[0, 1]`.
    pub fn luma_from_rgb(rgb: &ImageRgb8) -> Self {
        let data = rgb
            .pixels()
            .map(|[r, g, b]| (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0)
            .collect();
        Self {
            w: rgb.w,
            h: rgb.h,
            stride: rgb.w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.stride + x] = v;
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_maps_white_to_one_and_black_to_zero() {
        let data = [255u8, 255, 255, 0, 0, 0];
        let rgb = ImageRgb8::packed(2, 1, &data);
        let luma = ImageF32::luma_from_rgb(&rgb);
        assert!((luma.get(0, 0) - 1.0).abs() < 1e-5);
        assert_eq!(luma.get(1, 0), 0.0);
    }
}
