//! Greedy directional walkers that trace a bar one pixel at a time.
//!
//! Each step tests a fixed, ordered list of neighbouring window placements
//! and moves to the first one the classifier accepts. There is no
//! backtracking. A walk ends when no candidate passes or when the loop
//! precondition for the next step fails; every step strictly advances along
//! the travel axis, so a walk ends after at most `size` steps.
//!
//! - Up: row `-1`, column offsets in priority order `0, -1, +1, -2, +2`.
//! - Right: column `+1`, row offsets in priority order `0, +1, -1, +2, -2`.
//!
//! Candidates whose window leaves the frame are never evaluated and count as
//! failed.
use super::window::{WindowGeometry, WindowTest};
use crate::types::Point;
use log::trace;

/// Column offsets tried when stepping one row up.
pub const UP_CANDIDATES: [i32; 5] = [0, -1, 1, -2, 2];
/// Row offsets tried when stepping one column right.
pub const RIGHT_CANDIDATES: [i32; 5] = [0, 1, -1, 2, -2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved(Point),
    Stopped,
}

/// Walk direction together with its loop precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    /// `strict_bounds` additionally requires the `±2` row candidates to fit
    /// before a step is attempted.
    Right { strict_bounds: bool },
}

impl Direction {
    fn can_step(self, geometry: WindowGeometry, from: Point) -> bool {
        let WindowGeometry { size, half } = geometry;
        let Point { row: y, col: x } = from;
        match self {
            Direction::Up => y - 1 - half >= 0 && x - 2 - half >= 0 && x + 2 + half <= size,
            Direction::Right { strict_bounds } => {
                let adjacent = y - 1 - half >= 0 && y + 1 + half <= size && x + 1 + half <= size;
                let far = y - 2 - half >= 0 && y + 2 + half <= size;
                adjacent && (!strict_bounds || far)
            }
        }
    }

    fn candidates(self, from: Point) -> impl Iterator<Item = Point> {
        let (offsets, vertical) = match self {
            Direction::Up => (UP_CANDIDATES, true),
            Direction::Right { .. } => (RIGHT_CANDIDATES, false),
        };
        offsets.into_iter().map(move |d| {
            if vertical {
                from.offset(-1, d)
            } else {
                from.offset(d, 1)
            }
        })
    }
}

/// Attempt a single step from `from`.
pub fn step<T: WindowTest>(
    test: &mut T,
    geometry: WindowGeometry,
    direction: Direction,
    from: Point,
) -> Step {
    if !direction.can_step(geometry, from) {
        return Step::Stopped;
    }
    direction
        .candidates(from)
        .find(|&candidate| geometry.fits(candidate) && test.accepts(candidate))
        .map_or(Step::Stopped, Step::Moved)
}

/// Follow a bar from `start` until no candidate passes.
pub fn walk<T: WindowTest>(
    test: &mut T,
    geometry: WindowGeometry,
    direction: Direction,
    start: Point,
) -> Point {
    let mut current = start;
    let mut steps = 0usize;
    while let Step::Moved(next) = step(test, geometry, direction, current) {
        current = next;
        steps += 1;
    }
    trace!(
        "walk {:?} from ({}, {}) -> ({}, {}) in {} steps",
        direction,
        start.row,
        start.col,
        current.row,
        current.col,
        steps
    );
    current
}

/// Trace the vertical bar upward from its lower end.
pub fn walk_up<T: WindowTest>(test: &mut T, geometry: WindowGeometry, start: Point) -> Point {
    walk(test, geometry, Direction::Up, start)
}

/// Trace a horizontal bar rightward from its left end.
pub fn walk_right<T: WindowTest>(
    test: &mut T,
    geometry: WindowGeometry,
    start: Point,
    strict_bounds: bool,
) -> Point {
    walk(test, geometry, Direction::Right { strict_bounds }, start)
}
