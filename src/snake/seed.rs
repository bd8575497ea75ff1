//! Coarse seed scan.
//!
//! Steps a window over the frame bottom-to-top, left-to-right with a stride of
//! `half` and returns the first center whose window passes the classifier.
//! Windows without a single edge cell are rejected before classification.
//! The stride skips gaps of up to `half - 1` pixels between scan positions.
use super::window::{WindowGeometry, WindowTest};
use crate::types::Point;

/// Scan positions in order: rows from `size - half` down to `half`, columns
/// from `half` up to `size - half`, both stepping by `half`.
pub fn scan_positions(geometry: WindowGeometry) -> impl Iterator<Item = Point> {
    let WindowGeometry { size, half } = geometry;
    let step = half.max(1);
    let rows = (0..)
        .map(move |i| size - half - i * step)
        .take_while(move |&y| y >= half);
    rows.flat_map(move |y| {
        (half..=size - half)
            .step_by(step as usize)
            .map(move |x| Point::new(y, x))
    })
}

/// First acceptable seed window, or `None` when no window in the grid passes.
pub fn find_seed<T: WindowTest>(test: &mut T, geometry: WindowGeometry) -> Option<Point> {
    scan_positions(geometry).find(|&center| test.may_contain_gate(center) && test.accepts(center))
}
