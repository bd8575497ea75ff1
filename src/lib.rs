#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Building blocks – public for tooling and custom pipelines.
pub mod color;
pub mod config;
pub mod edges;
pub mod snake;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, GateDetector, GateParams};
pub use crate::error::{DetectError, Error, Result};
pub use crate::snake::{detect_gate, search_gate};
pub use crate::types::{CornerQuad, GateResult, Point};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use snake_gate::prelude::*;
///
/// # fn main() {
/// let size = 200usize;
/// let rgb = vec![0u8; size * size * 3];
/// let frame = ImageRgb8::packed(size, size, &rgb);
///
/// let detector = GateDetector::new(DetectorParams::new(GateParams::new(9, 15.0)));
/// let result = detector.process(&frame).expect("square frame");
/// println!("found={}", result.is_found());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, Mask};
    pub use crate::{detect_gate, DetectorParams, GateDetector, GateParams, GateResult};
}
