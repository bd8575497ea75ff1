//! Parameter types configuring the detector.
//!
//! `kernel` and `sigma` have no defaults: they depend on the camera resolution
//! and on how large the gate appears, and must be chosen per setup. The color
//! range and edge thresholds default to the tuned blue-gate values.

use crate::color::HsvRange;
use crate::edges::CannyOptions;
use serde::Deserialize;

/// Snake-search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GateParams {
    /// Odd window side length; the window half-width is `(kernel - 1) / 2`.
    pub kernel: usize,
    /// Minimum bar length in pixels.
    pub sigma: f32,
    /// Stop the rightward walk before its `±2` row candidates could leave the
    /// frame. Off by default, which keeps the walk running along the top and
    /// bottom margins and only skips the candidates that do not fit.
    #[serde(default)]
    pub strict_walk_bounds: bool,
}

impl GateParams {
    pub fn new(kernel: usize, sigma: f32) -> Self {
        Self {
            kernel,
            sigma,
            strict_walk_bounds: false,
        }
    }

    pub fn with_strict_walk_bounds(mut self, strict: bool) -> Self {
        self.strict_walk_bounds = strict;
        self
    }
}

/// Detector-wide parameters: snake search plus the default mask providers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetectorParams {
    pub gate: GateParams,
    /// Target color range used by the default color segmenter.
    #[serde(default)]
    pub color: HsvRange,
    /// Edge detector thresholds.
    #[serde(default)]
    pub edges: CannyOptions,
}

impl DetectorParams {
    pub fn new(gate: GateParams) -> Self {
        Self {
            gate,
            color: HsvRange::default(),
            edges: CannyOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_default_when_omitted() {
        let params: DetectorParams =
            serde_json::from_str(r#"{ "gate": { "kernel": 19, "sigma": 90.0 } }"#)
                .expect("valid params");
        assert_eq!(params.gate, GateParams::new(19, 90.0));
        assert_eq!(params.color, HsvRange::default());
        assert_eq!(params.edges, CannyOptions::default());
    }

    #[test]
    fn kernel_and_sigma_are_required() {
        let parsed: Result<DetectorParams, _> = serde_json::from_str(r#"{ "gate": { "kernel": 9 } }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn partial_color_range_keeps_remaining_defaults() {
        let params: DetectorParams = serde_json::from_str(
            r#"{ "gate": { "kernel": 9, "sigma": 15.0, "strict_walk_bounds": true },
                 "color": { "lower": [100, 80, 80] },
                 "edges": { "kernel": "scharr" } }"#,
        )
        .expect("valid params");
        assert!(params.gate.strict_walk_bounds);
        assert_eq!(params.color.lower, [100, 80, 80]);
        assert_eq!(params.color.upper, HsvRange::default().upper);
        assert_eq!(params.edges.kernel, crate::edges::GradientKernel::Scharr);
        assert_eq!(params.edges.high, 0.8);
    }
}
