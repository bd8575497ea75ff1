//! Dense gate-coverage mask for tuning the classifier.
//!
//! Classifies every window center with a stride of one and paints each
//! accepted window into an output mask. This is the mask the snake search
//! would see if it searched the whole frame instead of following bars; it is
//! not used by the detector itself.
use super::window::{classify, WindowGeometry};
use crate::error::DetectError;
use crate::image::{ImageView, Mask};
use crate::types::Point;
use rayon::prelude::*;

pub fn gate_coverage(color: &Mask, edges: &Mask, kernel: usize) -> Result<Mask, DetectError> {
    super::validate_inputs(color, edges, kernel)?;
    let size = color.width();
    let geometry = WindowGeometry::new(size, kernel);
    let half = geometry.half;

    let rows: Vec<i32> = (half..=geometry.size - half).collect();
    let accepted: Vec<(i32, Vec<i32>)> = rows
        .par_iter()
        .map(|&y| {
            let cols = (half..=geometry.size - half)
                .filter(|&x| {
                    geometry
                        .window(Point::new(y, x))
                        .is_some_and(|w| classify(color, edges, w))
                })
                .collect();
            (y, cols)
        })
        .collect();

    let mut out = Mask::new(size, size);
    for (y, cols) in accepted {
        for x in cols {
            if let Some(w) = geometry.window(Point::new(y, x)) {
                out.fill(w.rows(), w.cols());
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_paints_only_around_the_bar() {
        let mut color = Mask::new(40, 40);
        color.fill(10..30, 15..25);
        let mut edges = Mask::new(40, 40);
        edges.fill(10..30, 15..16);
        edges.fill(10..30, 24..25);

        let coverage = gate_coverage(&color, &edges, 7).expect("valid inputs");
        assert!(coverage.get(20, 16));
        assert!(!coverage.get(2, 2));
        assert!(!coverage.get(20, 35));
    }

    #[test]
    fn coverage_rejects_even_kernel() {
        let mask = Mask::new(10, 10);
        assert_eq!(
            gate_coverage(&mask, &mask, 4),
            Err(DetectError::EvenKernel(4))
        );
    }
}
