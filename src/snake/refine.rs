//! Corner refinement: rebuild a short horizontal bar from its counterpart.
//!
//! The two horizontal bars of a gate are assumed parallel and of equal length,
//! so a degenerate bar is replaced by translating the vertical bar's endpoint
//! along the other bar's vector. At most one bar is rebuilt; the bottom bar is
//! checked first.
use crate::types::CornerQuad;
use serde::Serialize;

/// Which corner, if any, was synthesized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Refinement {
    None,
    /// `p3 = p1 + (p4 - p2)`
    RebuiltBottom,
    /// `p4 = p2 + (p3 - p1)`
    RebuiltTop,
}

/// Refine a quad whose bars were traced independently.
pub fn refine_corners(quad: CornerQuad, sigma: f32) -> (CornerQuad, Refinement) {
    let mut out = quad;
    if quad.bottom_len() < sigma {
        out.p3 = quad.p1 + (quad.p4 - quad.p2);
        (out, Refinement::RebuiltBottom)
    } else if quad.top_len() < sigma {
        out.p4 = quad.p2 + (quad.p3 - quad.p1);
        (out, Refinement::RebuiltTop)
    } else {
        (out, Refinement::None)
    }
}
