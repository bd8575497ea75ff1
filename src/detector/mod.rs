//! Gate detector orchestrating mask providers and the snake search.
//!
//! Overview
//! - Segments the target color into a binary mask ([`crate::color`]).
//! - Detects edges into a second binary mask ([`crate::edges`]).
//! - Runs the snake search on the two masks ([`crate::snake`]): a coarse
//!   bottom-up scan finds one seed window on the gate's left bar, the bar is
//!   followed upward, both horizontal bars are followed rightward, and the
//!   corners are accepted only if the bars are long enough.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the demo tool.
//! - `pipeline` – the [`GateDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{DetectorParams, GateParams};
pub use pipeline::{FrameMasks, GateDetector};
