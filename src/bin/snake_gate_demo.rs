use env_logger::{Builder, Env};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use snake_gate::config::{load_config, RuntimeConfig};
use snake_gate::detector::FrameMasks;
use snake_gate::image::io::{load_rgb_image, save_mask, save_overlay, write_json_file};
use snake_gate::image::RgbImageBuf;
use snake_gate::snake::gate_coverage;
use snake_gate::{DetectionReport, GateDetector, GateResult, Point};
use std::env;
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let files = config.input_files()?;
    info!("processing {} image(s) from {}", files.len(), config.input.display());

    let detector = GateDetector::new(config.detector.clone());
    let outcomes: Vec<FrameOutcome> = files
        .par_iter()
        .map(|path| detect_file(&detector, path, &config))
        .collect();

    let mut found = 0usize;
    for outcome in &outcomes {
        match (&outcome.error, outcome.report.as_ref().map(|r| &r.result)) {
            (Some(err), _) => println!("{}: error: {err}", outcome.file.display()),
            (None, Some(GateResult::Found(quad))) => {
                found += 1;
                println!(
                    "{}: gate P1=({}, {}) P2=({}, {}) P3=({}, {}) P4=({}, {})",
                    outcome.file.display(),
                    quad.p1.row,
                    quad.p1.col,
                    quad.p2.row,
                    quad.p2.col,
                    quad.p3.row,
                    quad.p3.col,
                    quad.p4.row,
                    quad.p4.col
                );
            }
            (None, _) => println!("{}: no gate", outcome.file.display()),
        }
    }
    info!("gate found in {found}/{} image(s)", outcomes.len());

    if let Some(json_out) = &config.output.json_out {
        write_json_file(json_out, &outcomes)?;
        println!("Saved report to {}", json_out.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: snake_gate_demo <config.json>".to_string()
}

struct Frame {
    file: PathBuf,
    full: RgbImageBuf,
    /// Square frame handed to the detector.
    square: RgbImageBuf,
    origin: Point,
}

fn load_frame(path: &Path, config: &RuntimeConfig) -> CliResult<Frame> {
    let full = load_rgb_image(path)?;
    let (square, origin) = if full.width() == full.height() || !config.crop_to_square {
        (full.clone(), Point::default())
    } else {
        warn!(
            "{}: cropping {}x{} frame to a centered square",
            path.display(),
            full.width(),
            full.height()
        );
        full.center_crop_square()
    };
    Ok(Frame {
        file: path.to_path_buf(),
        full,
        square,
        origin,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameOutcome {
    file: PathBuf,
    /// Offset of the detector's square frame inside the original image.
    origin: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<DetectionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Decode one file and run the detector on it; failures become part of the outcome.
fn detect_file(detector: &GateDetector, path: &Path, config: &RuntimeConfig) -> FrameOutcome {
    match load_frame(path, config) {
        Ok(frame) => process_frame(detector, &frame, config),
        Err(err) => FrameOutcome {
            file: path.to_path_buf(),
            origin: Point::default(),
            report: None,
            error: Some(err.to_string()),
        },
    }
}

fn process_frame(detector: &GateDetector, frame: &Frame, config: &RuntimeConfig) -> FrameOutcome {
    let mut outcome = FrameOutcome {
        file: frame.file.clone(),
        origin: frame.origin,
        report: None,
        error: None,
    };
    match detector.process_with_masks(&frame.square.as_view()) {
        Ok((report, masks)) => {
            if let Err(err) = save_outputs(frame, &report, &masks, config) {
                outcome.error = Some(err.to_string());
            }
            outcome.report = Some(report);
        }
        Err(err) => outcome.error = Some(err.to_string()),
    }
    outcome
}

fn save_outputs(
    frame: &Frame,
    report: &DetectionReport,
    masks: &FrameMasks,
    config: &RuntimeConfig,
) -> CliResult<()> {
    let stem = frame
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    if let Some(dir) = &config.output.mask_dir {
        save_mask(&masks.color, &dir.join(format!("{stem}_color.png")))?;
        save_mask(&masks.edges, &dir.join(format!("{stem}_edges.png")))?;
        let coverage = gate_coverage(&masks.color, &masks.edges, config.detector.gate.kernel)?;
        save_mask(&coverage, &dir.join(format!("{stem}_coverage.png")))?;
    }
    if let Some(dir) = &config.output.overlay_dir {
        save_overlay(
            &frame.full.as_view(),
            report.result.corners(),
            frame.origin,
            &dir.join(format!("{stem}_gate.png")),
        )?;
    }
    Ok(())
}
