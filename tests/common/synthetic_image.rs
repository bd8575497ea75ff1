#![allow(dead_code)]

use snake_gate::image::Mask;

/// Axis-aligned block `(row0, row1, col0, col1)`, end-exclusive.
pub type Block = (usize, usize, usize, usize);

pub const BACKGROUND: [u8; 3] = [120, 120, 120];
pub const GATE_BLUE: [u8; 3] = [30, 60, 200];

/// Left bar of the reference gate in a 100x100 frame.
pub const LEFT_BAR: Block = (20, 80, 30, 40);
pub const BOTTOM_BAR: Block = (70, 80, 30, 70);
pub const TOP_BAR: Block = (20, 30, 30, 70);

/// Reference gate: left bar plus both horizontal bars.
pub const GATE: [Block; 3] = [LEFT_BAR, BOTTOM_BAR, TOP_BAR];

fn inside(blocks: &[Block], row: i64, col: i64) -> bool {
    blocks.iter().any(|&(r0, r1, c0, c1)| {
        row >= r0 as i64 && row < r1 as i64 && col >= c0 as i64 && col < c1 as i64
    })
}

/// Color mask covering every block.
pub fn color_mask(size: usize, blocks: &[Block]) -> Mask {
    Mask::from_fn(size, size, |row, col| inside(blocks, row as i64, col as i64))
}

/// Outline of the union of `blocks`: shape cells with a 4-neighbour outside
/// the shape or outside the frame.
pub fn outline_mask(size: usize, blocks: &[Block]) -> Mask {
    let n = size as i64;
    Mask::from_fn(size, size, |row, col| {
        let (r, c) = (row as i64, col as i64);
        if !inside(blocks, r, c) {
            return false;
        }
        [(-1, 0), (1, 0), (0, -1), (0, 1)].iter().any(|&(dr, dc)| {
            let (nr, nc) = (r + dr, c + dc);
            nr < 0 || nc < 0 || nr >= n || nc >= n || !inside(blocks, nr, nc)
        })
    })
}

/// Color and edge masks of a synthetic gate.
pub fn gate_masks(size: usize, blocks: &[Block]) -> (Mask, Mask) {
    (color_mask(size, blocks), outline_mask(size, blocks))
}

/// Packed RGB frame with `blocks` painted blue on a gray background.
pub fn gate_rgb(size: usize, blocks: &[Block]) -> Vec<u8> {
    let mut data = Vec::with_capacity(size * size * 3);
    for row in 0..size {
        for col in 0..size {
            let px = if inside(blocks, row as i64, col as i64) {
                GATE_BLUE
            } else {
                BACKGROUND
            };
            data.extend_from_slice(&px);
        }
    }
    data
}
