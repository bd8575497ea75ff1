//! Canny‑style binary edge mask: gradients, direction‑aligned non‑maximum
//! suppression and double‑threshold hysteresis.
//!
//! NMS compares each pixel with its two neighbours along the gradient
//! direction (quantized to 0°, 45°, 90°, 135°). A pixel survives when it is
//! strictly greater than the neighbour on the preceding side and not smaller
//! than the one on the following side, so a perfect step edge keeps exactly
//! one of its two equal‑magnitude pixels.
//!
//! Hysteresis keeps every surviving pixel `>= high` plus all surviving pixels
//! `>= low` that are 8‑connected to one of them. The outermost 1‑pixel frame
//! is never marked.
use super::grad::{image_gradients, Grad, GradientKernel};
use crate::image::{ImageF32, ImageView, Mask};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Thin the gradient magnitude, returning the kept magnitude per pixel
/// (zero where suppressed or below `low`).
pub fn suppress_non_maxima(grad: &Grad, low: f32) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low || mag == 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // (preceding, following) neighbour along the gradient
            let (before, after) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x - 1], mag_next[x + 1])
                } else {
                    (mag_prev[x + 1], mag_next[x - 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag > before && mag >= after {
                out.set(x, y, mag);
            }
        }
    }
    out
}

/// Double threshold with 8‑connected hysteresis on a thinned magnitude image.
pub fn hysteresis(thin: &ImageF32, low: f32, high: f32) -> Mask {
    let (w, h) = (thin.w, thin.h);
    let mut mask = Mask::new(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for (x, &m) in thin.row(y).iter().enumerate() {
            if m > 0.0 && m >= high {
                mask.set(y, x, true);
                stack.push((y, x));
            }
        }
    }

    while let Some((y, x)) = stack.pop() {
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let m = thin.get(nx, ny);
                if !mask.get(ny, nx) && m > 0.0 && m >= low {
                    mask.set(ny, nx, true);
                    stack.push((ny, nx));
                }
            }
        }
    }
    mask
}

/// Full edge pass on a luma image.
pub fn canny(l: &ImageF32, low: f32, high: f32, kernel: GradientKernel) -> Mask {
    let grad = image_gradients(l, kernel);
    let thin = suppress_non_maxima(&grad, low);
    hysteresis(&thin, low, high)
}
