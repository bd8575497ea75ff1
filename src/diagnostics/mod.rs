//! Diagnostics returned alongside a detection.
//!
//! [`DetectionReport`] bundles the result with a [`PipelineTrace`]: the input
//! description, mask statistics, stage latencies and the snake-search record
//! (seed, traced corners, where it stopped, windows classified per stage).

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::snake::GateSearch;
use crate::types::GateResult;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: GateResult,
    pub trace: PipelineTrace,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    /// True cells in the color mask.
    pub color_pixels: usize,
    /// True cells in the edge mask.
    pub edge_pixels: usize,
    pub timings: TimingBreakdown,
    pub search: GateSearch,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub size: usize,
    pub kernel: usize,
    pub sigma: f32,
}
