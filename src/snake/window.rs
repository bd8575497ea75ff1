//! Window geometry and the color/edge window classifier.
//!
//! A window with half-width `half` centered at `(row, col)` spans
//! `[row - half, row + half) × [col - half, col + half)`, so its side is
//! `2 * half` pixels. A window is only ever read when it fits the image.
//!
//! Acceptance compares the color count against an area-proportional floor and
//! the edge count against a side-proportional floor:
//!
//! - `color >= 0.3 * side²`
//! - `edges >= 0.3 * side`
//!
//! Both comparisons are evaluated exactly in integer tenths.
use crate::image::Mask;
use crate::types::Point;
use std::ops::Range;

/// Required fill, in tenths, of the window area by color cells.
pub const COLOR_FILL_TENTHS: usize = 3;
/// Required number of edge cells, in tenths of the window side.
pub const EDGE_FILL_TENTHS: usize = 3;

/// Size of the (square) frame and the half-width of the classification window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowGeometry {
    pub size: i32,
    pub half: i32,
}

impl WindowGeometry {
    /// Geometry for an odd `kernel`; `half = (kernel - 1) / 2`.
    pub fn new(size: usize, kernel: usize) -> Self {
        Self {
            size: size as i32,
            half: (kernel.saturating_sub(1) / 2) as i32,
        }
    }

    pub fn side(&self) -> usize {
        (2 * self.half) as usize
    }

    #[inline]
    pub fn fits(&self, center: Point) -> bool {
        let h = self.half;
        center.row - h >= 0
            && center.row + h <= self.size
            && center.col - h >= 0
            && center.col + h <= self.size
    }

    pub fn window(&self, center: Point) -> Option<Window> {
        self.fits(center).then_some(Window {
            center,
            half: self.half,
        })
    }
}

/// Square classification window that is known to fit its frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub center: Point,
    pub half: i32,
}

impl Window {
    pub fn rows(&self) -> Range<usize> {
        (self.center.row - self.half) as usize..(self.center.row + self.half) as usize
    }

    pub fn cols(&self) -> Range<usize> {
        (self.center.col - self.half) as usize..(self.center.col + self.half) as usize
    }

    pub fn side(&self) -> usize {
        (2 * self.half) as usize
    }
}

/// Pass/fail decision for one window from its color and edge counts.
#[inline]
pub fn classify_counts(color_count: usize, edge_count: usize, side: usize) -> bool {
    color_count * 10 >= COLOR_FILL_TENTHS * side * side && edge_count * 10 >= EDGE_FILL_TENTHS * side
}

/// Classify the identically shaped window slices of a color and an edge mask.
pub fn classify(color: &Mask, edges: &Mask, window: Window) -> bool {
    let color_count = color.count_in(window.rows(), window.cols());
    let edge_count = edges.count_in(window.rows(), window.cols());
    classify_counts(color_count, edge_count, window.side())
}

/// A yes/no test of the window centered at a point.
///
/// The walkers and the seed scanner only talk to this trait, which keeps the
/// candidate ordering testable with plain closures.
pub trait WindowTest {
    fn accepts(&mut self, center: Point) -> bool;

    /// Cheap pre-filter used by the coarse scan; defaults to "maybe".
    fn may_contain_gate(&mut self, _center: Point) -> bool {
        true
    }
}

impl<F> WindowTest for F
where
    F: FnMut(Point) -> bool,
{
    fn accepts(&mut self, center: Point) -> bool {
        self(center)
    }
}

/// Production classifier over a color mask and an edge mask.
///
/// Counts every window it actually evaluates so callers can observe how much
/// work each stage did.
pub struct MaskClassifier<'a> {
    color: &'a Mask,
    edges: &'a Mask,
    geometry: WindowGeometry,
    probes: usize,
}

impl<'a> MaskClassifier<'a> {
    pub fn new(color: &'a Mask, edges: &'a Mask, geometry: WindowGeometry) -> Self {
        Self {
            color,
            edges,
            geometry,
            probes: 0,
        }
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Number of windows classified so far.
    pub fn probes(&self) -> usize {
        self.probes
    }
}

impl WindowTest for MaskClassifier<'_> {
    fn accepts(&mut self, center: Point) -> bool {
        let Some(window) = self.geometry.window(center) else {
            return false;
        };
        self.probes += 1;
        classify(self.color, self.edges, window)
    }

    fn may_contain_gate(&mut self, center: Point) -> bool {
        self.geometry
            .window(center)
            .is_some_and(|w| self.edges.any_in(w.rows(), w.cols()))
    }
}
