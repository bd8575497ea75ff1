use nalgebra::Vector2;
use serde::Serialize;
use std::ops::{Add, Sub};

/// Integer window center, `(row, col)` with row 0 at the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    pub fn as_vector(self) -> Vector2<f32> {
        Vector2::new(self.row as f32, self.col as f32)
    }

    /// Euclidean distance in pixels.
    pub fn distance(self, other: Point) -> f32 {
        (self.as_vector() - other.as_vector()).norm()
    }
}

impl Add<Vector2<i32>> for Point {
    type Output = Point;

    fn add(self, d: Vector2<i32>) -> Point {
        self.offset(d.x, d.y)
    }
}

impl Sub for Point {
    type Output = Vector2<i32>;

    fn sub(self, other: Point) -> Vector2<i32> {
        Vector2::new(self.row - other.row, self.col - other.col)
    }
}

/// Gate corners: bottom (`p1`) and top (`p2`) of the left vertical bar, and
/// the right-hand ends of the bottom (`p3`) and top (`p4`) horizontal bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CornerQuad {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub p4: Point,
}

impl CornerQuad {
    pub fn vertical_len(&self) -> f32 {
        self.p1.distance(self.p2)
    }

    pub fn bottom_len(&self) -> f32 {
        self.p1.distance(self.p3)
    }

    pub fn top_len(&self) -> f32 {
        self.p2.distance(self.p4)
    }

    pub fn corners(&self) -> [Point; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "corners", rename_all = "camelCase")]
pub enum GateResult {
    Found(CornerQuad),
    NotFound,
}

impl GateResult {
    pub fn is_found(&self) -> bool {
        matches!(self, GateResult::Found(_))
    }

    pub fn corners(&self) -> Option<&CornerQuad> {
        match self {
            GateResult::Found(quad) => Some(quad),
            GateResult::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_and_translation_round_trip() {
        let a = Point::new(10, 4);
        let b = Point::new(3, 9);
        let d = b - a;
        assert_eq!(d, Vector2::new(-7, 5));
        assert_eq!(a + d, b);
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((Point::new(0, 0).distance(Point::new(3, 4)) - 5.0).abs() < 1e-6);
    }
}
