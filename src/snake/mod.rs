//! Snake search: classify small windows and follow the gate's bars instead of
//! scanning the whole frame.
//!
//! Components, leaves first:
//!
//! - [`window`] – window geometry and the color/edge window classifier.
//! - [`seed`] – coarse bottom-up scan for the first plausible gate window.
//! - [`walker`] – greedy up/right walkers tracing the bars.
//! - [`assembler`] – seed → walk up → walk right (×2) → length checks → refine.
//! - [`refine`] – rebuild a short horizontal bar from the other one.
//! - [`coverage`] – dense window classification used for tuning only.
//!
//! Everything here is pure: each call reads its masks and owns its points.
//! The frame must be square; its side is the single `size` used for bounds on
//! both axes.

pub mod assembler;
pub mod coverage;
pub mod refine;
pub mod seed;
pub mod walker;
pub mod window;

pub use assembler::{assemble, GateSearch, GateStage, StageProbes, TracedCorners};
pub use coverage::gate_coverage;
pub use refine::{refine_corners, Refinement};
pub use seed::find_seed;
pub use walker::{walk_right, walk_up, Direction, Step};
pub use window::{classify, MaskClassifier, Window, WindowGeometry, WindowTest};

use crate::detector::GateParams;
use crate::error::DetectError;
use crate::image::{ImageView, Mask};
use crate::types::GateResult;

/// Reject malformed inputs before any scanning.
pub fn validate_inputs(color: &Mask, edges: &Mask, kernel: usize) -> Result<(), DetectError> {
    if !color.is_square() {
        return Err(DetectError::NonSquareImage {
            width: color.width(),
            height: color.height(),
        });
    }
    let size = color.width();
    if edges.width() != size || edges.height() != size {
        return Err(DetectError::MaskDimensionMismatch {
            mask: "edge",
            width: edges.width(),
            height: edges.height(),
            expected: size,
        });
    }
    if kernel % 2 == 0 {
        return Err(DetectError::EvenKernel(kernel));
    }
    if kernel < 3 {
        return Err(DetectError::KernelTooSmall(kernel));
    }
    Ok(())
}

fn validate_sigma(sigma: f32) -> Result<(), DetectError> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(DetectError::InvalidSigma(sigma))
    }
}

/// Locate a gate given its color mask and edge mask.
pub fn detect_gate(color: &Mask, edges: &Mask, params: &GateParams) -> Result<GateResult, DetectError> {
    Ok(search_gate(color, edges, params)?.result)
}

/// Same as [`detect_gate`] but keeps the per-stage record of the run.
pub fn search_gate(color: &Mask, edges: &Mask, params: &GateParams) -> Result<GateSearch, DetectError> {
    validate_inputs(color, edges, params.kernel)?;
    validate_sigma(params.sigma)?;
    let geometry = WindowGeometry::new(color.width(), params.kernel);
    let mut classifier = MaskClassifier::new(color, edges, geometry);
    Ok(assemble(&mut classifier, params))
}
