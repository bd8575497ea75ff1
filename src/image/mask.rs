//! Owned binary mask, same spatial extent as the frame it was derived from.
//!
//! Produced by the color segmenter ("is target color") and the edge detector
//! ("is edge"). Indexed `(row, col)` with row 0 at the top.
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    w: usize,
    h: usize,
    data: Vec<bool>,
}

impl Mask {
    /// All-false mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    /// Build from a row-major buffer; returns `None` if the length is not `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<bool>) -> Option<Self> {
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    /// Build by evaluating `f(row, col)` for every cell.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for row in 0..h {
            for col in 0..w {
                data.push(f(row, col));
            }
        }
        Self { w, h, data }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data[row * self.w + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: bool) {
        self.data[row * self.w + col] = v;
    }

    /// Set every cell of the rectangle to `true`. Ranges are clipped to the mask.
    pub fn fill(&mut self, rows: Range<usize>, cols: Range<usize>) {
        let cols = cols.start.min(self.w)..cols.end.min(self.w);
        for row in rows.start.min(self.h)..rows.end.min(self.h) {
            let start = row * self.w;
            self.data[start + cols.start..start + cols.end].fill(true);
        }
    }

    /// Number of true cells inside the rectangle. Caller guarantees bounds.
    pub fn count_in(&self, rows: Range<usize>, cols: Range<usize>) -> usize {
        rows.map(|row| {
            let start = row * self.w;
            self.data[start + cols.start..start + cols.end]
                .iter()
                .filter(|&&v| v)
                .count()
        })
        .sum()
    }

    /// Whether any cell inside the rectangle is true. Caller guarantees bounds.
    pub fn any_in(&self, mut rows: Range<usize>, cols: Range<usize>) -> bool {
        rows.any(|row| {
            let start = row * self.w;
            self.data[start + cols.start..start + cols.end]
                .iter()
                .any(|&v| v)
        })
    }

    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

impl crate::image::traits::ImageView for Mask {
    type Pixel = bool;

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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
