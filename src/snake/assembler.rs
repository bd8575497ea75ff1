//! Gate assembly: seed scan, vertical walk, horizontal walks, length checks
//! and refinement, run as a strictly linear pipeline with two early exits.
//!
//! One seed, one attempt: a candidate that fails a length check is rejected
//! without rescanning for another seed.
use super::refine::{refine_corners, Refinement};
use super::seed::find_seed;
use super::walker::{walk_right, walk_up};
use super::window::MaskClassifier;
use crate::detector::GateParams;
use crate::types::{CornerQuad, GateResult, Point};
use log::debug;
use serde::Serialize;

/// Stages of a single assembly run. The final stage is either `Accepted` or
/// `Rejected`; `rejected_at` in [`GateSearch`] names the stage that rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GateStage {
    SeedSearch,
    VerticalWalk,
    LengthCheck1,
    HorizontalWalk,
    LengthCheck2,
    Accepted,
    Rejected,
}

/// Windows classified by each stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProbes {
    pub seed: usize,
    pub vertical: usize,
    pub horizontal: usize,
}

impl StageProbes {
    pub fn total(&self) -> usize {
        self.seed + self.vertical + self.horizontal
    }
}

/// Corners as traced, before refinement. Missing entries were never reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracedCorners {
    pub p1: Option<Point>,
    pub p2: Option<Point>,
    pub p3: Option<Point>,
    pub p4: Option<Point>,
}

/// Outcome of one assembly run together with what each stage produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateSearch {
    pub result: GateResult,
    pub stage: GateStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<GateStage>,
    pub traced: TracedCorners,
    pub refinement: Refinement,
    pub probes: StageProbes,
}

impl GateSearch {
    fn new() -> Self {
        Self {
            result: GateResult::NotFound,
            stage: GateStage::SeedSearch,
            rejected_at: None,
            traced: TracedCorners::default(),
            refinement: Refinement::None,
            probes: StageProbes::default(),
        }
    }

    fn reject(mut self) -> Self {
        debug!("gate rejected at {:?}", self.stage);
        self.rejected_at = Some(self.stage);
        self.stage = GateStage::Rejected;
        self.result = GateResult::NotFound;
        self
    }
}

/// Run the snake search with an already validated classifier.
pub fn assemble(classifier: &mut MaskClassifier<'_>, params: &GateParams) -> GateSearch {
    let geometry = classifier.geometry();
    let sigma = params.sigma;
    let mut search = GateSearch::new();

    let seed = find_seed(classifier, geometry);
    search.probes.seed = classifier.probes();
    let Some(p1) = seed else {
        debug!("no seed window in {}x{} frame", geometry.size, geometry.size);
        return search.reject();
    };
    debug!("seed window at ({}, {})", p1.row, p1.col);
    search.traced.p1 = Some(p1);

    search.stage = GateStage::VerticalWalk;
    let p2 = walk_up(classifier, geometry, p1);
    search.traced.p2 = Some(p2);
    search.probes.vertical = classifier.probes() - search.probes.seed;

    search.stage = GateStage::LengthCheck1;
    let vertical = p1.distance(p2);
    if vertical < sigma {
        debug!("vertical bar {vertical:.1}px shorter than sigma {sigma:.1}px");
        return search.reject();
    }

    search.stage = GateStage::HorizontalWalk;
    let before = classifier.probes();
    let p3 = walk_right(classifier, geometry, p1, params.strict_walk_bounds);
    let p4 = walk_right(classifier, geometry, p2, params.strict_walk_bounds);
    search.probes.horizontal = classifier.probes() - before;
    search.traced.p3 = Some(p3);
    search.traced.p4 = Some(p4);

    search.stage = GateStage::LengthCheck2;
    let quad = CornerQuad { p1, p2, p3, p4 };
    let (bottom, top) = (quad.bottom_len(), quad.top_len());
    if bottom < sigma && top < sigma {
        debug!("horizontal bars {bottom:.1}px / {top:.1}px shorter than sigma {sigma:.1}px");
        return search.reject();
    }

    let (refined, refinement) = refine_corners(quad, sigma);
    debug!(
        "gate accepted: vertical={vertical:.1} bottom={bottom:.1} top={top:.1} refinement={refinement:?}"
    );
    search.stage = GateStage::Accepted;
    search.refinement = refinement;
    search.result = GateResult::Found(refined);
    search
}

