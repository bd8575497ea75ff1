//! Detector pipeline: color mask → edge mask → snake search, per frame.
//!
//! Typical usage:
//! ```no_run
//! use snake_gate::{DetectorParams, GateDetector, GateParams};
//! use snake_gate::image::ImageRgb8;
//!
//! # fn example(frame: ImageRgb8) {
//! let detector = GateDetector::new(DetectorParams::new(GateParams::new(19, 90.0)));
//! match detector.process(&frame) {
//!     Ok(result) => println!("found={}", result.is_found()),
//!     Err(err) => eprintln!("bad frame: {err}"),
//! }
//! # }
//! ```
//!
//! The detector keeps no state between frames, so `process` takes `&self` and
//! independent frames can run concurrently ([`GateDetector::process_batch`]).
use super::params::{DetectorParams, GateParams};
use crate::color::{ColorSegmenter, HsvRange};
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::edges::{CannyOptions, EdgeDetector};
use crate::error::DetectError;
use crate::image::{ImageRgb8, Mask};
use crate::snake::search_gate;
use crate::types::GateResult;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Gate detector combining a color segmenter, an edge detector and the snake
/// search.
#[derive(Clone, Debug)]
pub struct GateDetector<C = HsvRange, E = CannyOptions> {
    gate: GateParams,
    color: C,
    edges: E,
}

/// Masks computed for one frame, kept for visualization.
#[derive(Clone, Debug)]
pub struct FrameMasks {
    pub color: Mask,
    pub edges: Mask,
}

impl GateDetector {
    /// Create a detector using the HSV range and Canny thresholds in `params`.
    pub fn new(params: DetectorParams) -> Self {
        Self {
            gate: params.gate,
            color: params.color,
            edges: params.edges,
        }
    }
}

impl<C: ColorSegmenter, E: EdgeDetector> GateDetector<C, E> {
    /// Create a detector with custom mask providers.
    pub fn with_providers(gate: GateParams, color: C, edges: E) -> Self {
        Self { gate, color, edges }
    }

    /// Run the detector on one frame, returning only the result.
    pub fn process(&self, frame: &ImageRgb8) -> Result<GateResult, DetectError> {
        Ok(self.process_with_diagnostics(frame)?.result)
    }

    /// Run the detector and return both the result and a stage-by-stage trace.
    pub fn process_with_diagnostics(
        &self,
        frame: &ImageRgb8,
    ) -> Result<DetectionReport, DetectError> {
        self.process_with_masks(frame).map(|(report, _)| report)
    }

    /// Like [`Self::process_with_diagnostics`] but also hands back the masks.
    pub fn process_with_masks(
        &self,
        frame: &ImageRgb8,
    ) -> Result<(DetectionReport, FrameMasks), DetectError> {
        check_frame(frame)?;
        debug!(
            "GateDetector::process start size={} kernel={} sigma={:.1}",
            frame.w, self.gate.kernel, self.gate.sigma
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let color_start = Instant::now();
        let color = self.color.segment(frame);
        timings.push("color", elapsed_ms(color_start));

        let edge_start = Instant::now();
        let edges = self.edges.detect(frame);
        timings.push("edges", elapsed_ms(edge_start));

        let search_start = Instant::now();
        let search = search_gate(&color, &edges, &self.gate)?;
        timings.push("snake", elapsed_ms(search_start));
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "GateDetector::process done found={} probes={} total_ms={:.3}",
            search.result.is_found(),
            search.probes.total(),
            timings.total_ms
        );

        let trace = PipelineTrace {
            input: InputDescriptor {
                size: frame.w,
                kernel: self.gate.kernel,
                sigma: self.gate.sigma,
            },
            color_pixels: color.count_true(),
            edge_pixels: edges.count_true(),
            timings,
            search,
        };
        let report = DetectionReport {
            result: trace.search.result,
            trace,
        };
        Ok((report, FrameMasks { color, edges }))
    }
}

impl<C, E> GateDetector<C, E>
where
    C: ColorSegmenter + Sync,
    E: EdgeDetector + Sync,
{
    /// Process independent frames in parallel, one task per frame.
    pub fn process_batch(&self, frames: &[ImageRgb8<'_>]) -> Vec<Result<GateResult, DetectError>> {
        frames.par_iter().map(|frame| self.process(frame)).collect()
    }
}

fn check_frame(frame: &ImageRgb8) -> Result<(), DetectError> {
    if !frame.is_square() {
        return Err(DetectError::NonSquareImage {
            width: frame.w,
            height: frame.h,
        });
    }
    let row_bytes = frame.w * 3;
    let required = match frame.h {
        0 => 0,
        h => (h - 1) * frame.stride + row_bytes,
    };
    if frame.stride < row_bytes || frame.data.len() < required {
        return Err(DetectError::FrameBufferTooSmall {
            width: frame.w,
            height: frame.h,
            stride: frame.stride,
            len: frame.data.len(),
        });
    }
    Ok(())
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
