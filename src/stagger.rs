//! Staggered interpolation: pure functions that partition a global progress
//! value across ordered sub-elements so they animate sequentially rather
//! than simultaneously, plus the variable per-tick rate.

use crate::config::{SC_DIV, SC_GAP, SUB_LEVELS};

/// `1/n`, for `n >= 1`.
pub fn inverse(n: u32) -> f64 {
    1.0 / f64::from(n.max(1))
}

/// Progress of window `sub_index` out of `sub_count` equal windows of
/// `[0, 1]`, clamped and renormalized to `[0, 1]`.
///
/// Window `i` is fully idle until `global` passes `i/n`, ramps linearly, and
/// saturates at `1` once `global` passes `(i+1)/n`.
pub fn local_progress(global: f64, sub_index: u32, sub_count: u32) -> f64 {
    let inv = inverse(sub_count);
    let raw = (global - f64::from(sub_index) * inv).max(0.0);
    raw.min(inv) * f64::from(sub_count)
}

/// Two-level step selector: `0` below `SC_DIV`, `1` at or above it.
fn rate_factor(global: f64) -> f64 {
    (global / SC_DIV).floor()
}

/// Blend of two inverse rates keyed on [`rate_factor`]: `1/rate_a` in the
/// slow phase, `1/rate_b` once the threshold is crossed.
pub fn blended_inverse_rate(global: f64, rate_a: u32, rate_b: u32) -> f64 {
    let k = rate_factor(global);
    (1.0 - k) * inverse(rate_a) + k * inverse(rate_b)
}

/// Per-tick increment applied to a glyph's scale: small while the animation
/// crawls through the nested sub-parts, a full step afterwards.
pub fn frame_increment(global: f64, direction: f64) -> f64 {
    blended_inverse_rate(global, SUB_LEVELS, 1) * direction * SC_GAP
}
