//! Crossbox renders an animated vertical chain of "cross-box" glyphs.
//!
//! A tap reveals (or re-hides) one glyph through a staggered, multi-level
//! scale animation; each completed cycle advances the active position along
//! the chain, ping-ponging direction at the ends. The crate is headless: it
//! produces RGBA8 frames on the CPU, and the `crossbox` binary exports them
//! as PNGs.
#![forbid(unsafe_code)]

pub mod chain;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod stagger;
pub mod state;
pub mod view;

pub use crate::chain::{Chain, Settle};
pub use crate::core::{Canvas, Rgba8};
pub use crate::error::{CrossboxError, CrossboxResult};
pub use crate::render::{CpuRenderer, FrameRgba};
pub use crate::scheduler::Scheduler;
pub use crate::state::GlyphAnim;
pub use crate::view::{CrossBoxView, PaintOutcome};
