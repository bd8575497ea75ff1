mod common;

use common::synthetic_image::{
    gate_masks, gate_rgb, Block, BOTTOM_BAR, GATE, LEFT_BAR, TOP_BAR,
};
use snake_gate::color::ColorSegmenter;
use snake_gate::edges::EdgeDetector;
use snake_gate::image::{ImageRgb8, Mask};
use snake_gate::snake::{GateStage, Refinement};
use snake_gate::{
    detect_gate, search_gate, CornerQuad, DetectError, DetectorParams, GateDetector, GateParams,
    GateResult, Point,
};

const SIZE: usize = 100;
const KERNEL: usize = 9;
const SIGMA: f32 = 15.0;
/// A corner may sit anywhere inside the window that touches the bar's end.
const TOLERANCE: i32 = (KERNEL as i32 - 1) / 2;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn params() -> GateParams {
    GateParams::new(KERNEL, SIGMA)
}

fn assert_near(label: &str, got: Point, expected: Point) {
    assert!(
        (got.row - expected.row).abs() <= TOLERANCE && (got.col - expected.col).abs() <= TOLERANCE,
        "{label}: got ({}, {}), expected ({}, {}) ± {TOLERANCE}",
        got.row,
        got.col,
        expected.row,
        expected.col
    );
}

fn assert_reference_gate(quad: &CornerQuad) {
    assert_near("P1", quad.p1, Point::new(80, 30));
    assert_near("P2", quad.p2, Point::new(20, 30));
    assert_near("P3", quad.p3, Point::new(80, 70));
    assert_near("P4", quad.p4, Point::new(20, 70));
}

fn found(result: GateResult) -> CornerQuad {
    match result {
        GateResult::Found(quad) => quad,
        GateResult::NotFound => panic!("expected a gate"),
    }
}

#[test]
fn masks_of_full_gate_yield_its_corners() {
    init_logger();
    let (color, edges) = gate_masks(SIZE, &GATE);
    let search = search_gate(&color, &edges, &params()).expect("valid inputs");

    assert_eq!(search.stage, GateStage::Accepted);
    assert_eq!(search.refinement, Refinement::None);
    assert_reference_gate(&found(search.result));
}

#[test]
fn rgb_frame_with_blue_gate_is_detected() {
    init_logger();
    let rgb = gate_rgb(SIZE, &GATE);
    let frame = ImageRgb8::packed(SIZE, SIZE, &rgb);
    let detector = GateDetector::new(DetectorParams::new(params()));

    let report = detector
        .process_with_diagnostics(&frame)
        .expect("square frame");

    assert!(report.trace.color_pixels > 0);
    assert!(report.trace.edge_pixels > 0);
    assert!(report.trace.timings.stage_ms("snake").is_some());
    assert_reference_gate(&found(report.result));
}

#[test]
fn frame_without_target_color_has_no_gate() {
    init_logger();
    let rgb = gate_rgb(SIZE, &[]);
    let frame = ImageRgb8::packed(SIZE, SIZE, &rgb);
    let detector = GateDetector::new(DetectorParams::new(params()));

    let report = detector
        .process_with_diagnostics(&frame)
        .expect("square frame");

    assert_eq!(report.result, GateResult::NotFound);
    assert_eq!(report.trace.color_pixels, 0);
    assert_eq!(report.trace.search.rejected_at, Some(GateStage::SeedSearch));
}

#[test]
fn lone_vertical_bar_fails_horizontal_length_check() {
    init_logger();
    let bar: Block = (15, 85, 25, 35);
    let (color, edges) = gate_masks(SIZE, &[bar]);
    let search = search_gate(&color, &edges, &params()).expect("valid inputs");

    assert_eq!(search.result, GateResult::NotFound);
    assert_eq!(search.rejected_at, Some(GateStage::LengthCheck2));
    let (p1, p2) = (search.traced.p1.expect("seed"), search.traced.p2.expect("top"));
    assert!(p1.distance(p2) >= SIGMA);
    assert!(search.traced.p3.is_some() && search.traced.p4.is_some());
    assert!(search.probes.horizontal > 0);
}

#[test]
fn short_vertical_bar_skips_horizontal_walks() {
    init_logger();
    let blob: Block = (50, 60, 50, 60);
    let (color, edges) = gate_masks(SIZE, &[blob]);
    let search = search_gate(&color, &edges, &params()).expect("valid inputs");

    assert_eq!(search.result, GateResult::NotFound);
    assert_eq!(search.rejected_at, Some(GateStage::LengthCheck1));
    assert!(search.traced.p1.is_some() && search.traced.p2.is_some());
    assert_eq!(search.traced.p3, None);
    assert_eq!(search.traced.p4, None);
    assert!(search.probes.vertical > 0);
    assert_eq!(search.probes.horizontal, 0);
    assert_eq!(
        search.probes.total(),
        search.probes.seed + search.probes.vertical
    );
}

#[test]
fn missing_bottom_bar_is_rebuilt_from_top_bar() {
    init_logger();
    let (color, edges) = gate_masks(SIZE, &[LEFT_BAR, TOP_BAR]);
    let search = search_gate(&color, &edges, &params()).expect("valid inputs");

    assert_eq!(search.refinement, Refinement::RebuiltBottom);
    let quad = found(search.result);
    assert_eq!(quad.p3, quad.p1 + (quad.p4 - quad.p2));
    assert_near("P3", quad.p3, Point::new(80, 70));
    assert_near("P4", quad.p4, Point::new(20, 70));
    // The traced bottom end never left the vertical bar.
    let traced_p3 = search.traced.p3.expect("bottom walk ran");
    assert!(quad.p1.distance(traced_p3) < SIGMA);
}

#[test]
fn missing_top_bar_is_rebuilt_from_bottom_bar() {
    init_logger();
    let (color, edges) = gate_masks(SIZE, &[LEFT_BAR, BOTTOM_BAR]);
    let search = search_gate(&color, &edges, &params()).expect("valid inputs");

    assert_eq!(search.refinement, Refinement::RebuiltTop);
    let quad = found(search.result);
    assert_eq!(quad.p4, quad.p2 + (quad.p3 - quad.p1));
    assert_near("P3", quad.p3, Point::new(80, 70));
    assert!(quad.top_len() >= SIGMA);
}

#[test]
fn repeated_runs_are_identical() {
    init_logger();
    let (color, edges) = gate_masks(SIZE, &GATE);
    let first = search_gate(&color, &edges, &params()).expect("valid inputs");
    let second = search_gate(&color, &edges, &params()).expect("valid inputs");
    assert_eq!(first, second);
    assert_eq!(
        detect_gate(&color, &edges, &params()).expect("valid inputs"),
        first.result
    );
}

#[test]
fn batch_matches_sequential_processing() {
    init_logger();
    let gate = gate_rgb(SIZE, &GATE);
    let empty = gate_rgb(SIZE, &[]);
    let frames = [
        ImageRgb8::packed(SIZE, SIZE, &gate),
        ImageRgb8::packed(SIZE, SIZE, &empty),
    ];
    let detector = GateDetector::new(DetectorParams::new(params()));

    let batch = detector.process_batch(&frames);
    let sequential: Vec<_> = frames.iter().map(|f| detector.process(f)).collect();

    assert_eq!(batch, sequential);
    assert!(matches!(batch[0], Ok(GateResult::Found(_))));
    assert_eq!(batch[1], Ok(GateResult::NotFound));
}

#[test]
fn detector_rejects_non_square_frame() {
    let rgb = vec![0u8; 40 * 30 * 3];
    let frame = ImageRgb8::packed(40, 30, &rgb);
    let detector = GateDetector::new(DetectorParams::new(params()));
    assert_eq!(
        detector.process(&frame),
        Err(DetectError::NonSquareImage {
            width: 40,
            height: 30
        })
    );
}

#[test]
fn detector_rejects_frame_buffer_shorter_than_its_dimensions() {
    let detector = GateDetector::new(DetectorParams::new(params()));

    let short = vec![0u8; 10 * 10 * 3 - 3];
    let frame = ImageRgb8::packed(10, 10, &short);
    assert!(matches!(
        detector.process(&frame),
        Err(DetectError::FrameBufferTooSmall { len: 297, .. })
    ));

    let full = vec![0u8; 10 * 10 * 3];
    let narrow_stride = ImageRgb8 {
        w: 10,
        h: 10,
        stride: 20,
        data: &full,
    };
    assert!(matches!(
        detector.process_with_diagnostics(&narrow_stride),
        Err(DetectError::FrameBufferTooSmall { stride: 20, .. })
    ));
}

#[test]
fn padded_rows_are_accepted() {
    // 10x10 frame, rows padded to 40 bytes; the last row needs only 30.
    let padded = vec![0u8; 9 * 40 + 30];
    let frame = ImageRgb8 {
        w: 10,
        h: 10,
        stride: 40,
        data: &padded,
    };
    let detector = GateDetector::new(DetectorParams::new(params()));
    assert_eq!(detector.process(&frame), Ok(GateResult::NotFound));
}

/// Mask provider that ignores the frame and hands back a fixed mask.
struct FixedMask(Mask);

impl ColorSegmenter for FixedMask {
    fn segment(&self, _image: &ImageRgb8) -> Mask {
        self.0.clone()
    }
}

impl EdgeDetector for FixedMask {
    fn detect(&self, _image: &ImageRgb8) -> Mask {
        self.0.clone()
    }
}

#[test]
fn custom_mask_providers_drive_the_search() {
    init_logger();
    let (color, edges) = gate_masks(SIZE, &GATE);
    let detector = GateDetector::with_providers(params(), FixedMask(color), FixedMask(edges));

    // Pixel content is irrelevant: both masks come from the providers.
    let black = vec![0u8; SIZE * SIZE * 3];
    let frame = ImageRgb8::packed(SIZE, SIZE, &black);
    let report = detector
        .process_with_diagnostics(&frame)
        .expect("square frame");

    assert_eq!(report.trace.search.refinement, Refinement::None);
    assert_reference_gate(&found(report.result));
    assert_eq!(detector.process_batch(&[frame]), vec![Ok(report.result)]);
}
