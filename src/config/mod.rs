//! JSON configuration for the demo tool.
//!
//! ```json
//! {
//!   "input": "frames/",
//!   "crop_to_square": true,
//!   "detector": { "gate": { "kernel": 19, "sigma": 90.0 } },
//!   "output": { "json_out": "out/report.json", "overlay_dir": "out/overlays" }
//! }
//! ```

pub mod runtime;

pub use runtime::{load_config, OutputConfig, RuntimeConfig};
