//! View facade: tap handling and the per-paint update pass.

use crate::chain::{Chain, Settle};
use crate::core::Canvas;
use crate::error::CrossboxResult;
use crate::render::{CpuRenderer, FrameRgba};
use crate::scheduler::Scheduler;

/// Outcome of one paint pass: the rasterized frame, plus the settle event
/// when this pass ended the run.
#[derive(Clone, Debug)]
pub struct PaintOutcome {
    /// The frame, reflecting every node's scale before this pass's tick.
    pub frame: FrameRgba,
    /// Present exactly once per tap-driven run, on its final tick.
    pub settled: Option<Settle>,
}

/// Tap-driven view over a glyph chain.
///
/// Mirrors a host UI surface: [`tap`](Self::tap) arms the scheduler, and
/// each [`paint`](Self::paint) draws every node and, while the scheduler is
/// running, advances the active node one tick. The settle event that ends a
/// run stops the scheduler from within the same pass.
pub struct CrossBoxView {
    chain: Chain,
    scheduler: Scheduler,
    renderer: CpuRenderer,
}

impl CrossBoxView {
    /// Fresh view: all glyphs hidden, scheduler idle.
    pub fn new(canvas: Canvas) -> CrossboxResult<Self> {
        Ok(Self {
            chain: Chain::new(),
            scheduler: Scheduler::new(),
            renderer: CpuRenderer::new(canvas)?,
        })
    }

    /// The underlying chain, for inspection.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// True while a tap-driven run is in progress.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Handle a tap: begin a cycle on the active node and start the
    /// scheduler. Taps during a running cycle are ignored (`false`).
    pub fn tap(&mut self) -> bool {
        if self.chain.begin() { self.scheduler.start() } else { false }
    }

    /// Paint one frame, then — only while the scheduler is running — advance
    /// the animation one tick. Draw happens before the tick, so the frame
    /// always reflects the most recently settled or in-progress scales.
    pub fn paint(&mut self) -> CrossboxResult<PaintOutcome> {
        let frame = self.renderer.render(&self.chain)?;
        let mut settled = None;
        if self.scheduler.is_running() {
            settled = self.chain.update();
            if settled.is_some() {
                self.scheduler.stop();
            }
        }
        Ok(PaintOutcome { frame, settled })
    }
}
