//! Fixed display and animation constants. None are runtime-configurable.

use crate::core::Rgba8;

/// Number of glyphs in the chain.
pub const NODES: usize = 5;

/// Cross parts per glyph (inner 4-way split of the reveal).
pub const LINES: u32 = 4;

/// Outer split of a glyph's progress: cross reveal, then square spin.
pub const PARTS: u32 = 2;

/// Base per-tick progress step.
pub const SC_GAP: f64 = 0.05;

/// Threshold where the per-tick rate switches from slow to full.
pub const SC_DIV: f64 = 0.51;

/// Inverse rate of the slow phase: the product of the two nesting factors.
pub const SUB_LEVELS: u32 = LINES * PARTS;

/// Stroke width divisor: stroke = min(w, h) / `STROKE_FACTOR`.
pub const STROKE_FACTOR: f64 = 90.0;

/// Glyph size divisor: size = row gap / `SIZE_FACTOR`.
pub const SIZE_FACTOR: f64 = 2.9;

/// Scheduler tick delay hint for hosts driving a real-time loop, in
/// milliseconds. The library itself never sleeps.
pub const TICK_DELAY_MS: u64 = 20;

/// Glyph stroke color (#0D47A1).
pub const FORE_COLOR: Rgba8 = Rgba8::opaque(0x0D, 0x47, 0xA1);

/// Surface clear color (#BDBDBD).
pub const BACK_COLOR: Rgba8 = Rgba8::opaque(0xBD, 0xBD, 0xBD);
