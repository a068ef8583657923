//! Chain controller: a flat arena of glyph nodes, an active cursor, and the
//! ping-pong traversal policy.

use crate::config::NODES;
use crate::state::GlyphAnim;

/// Settle event: the cycle on `node` committed at `scale` (exactly 0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Settle {
    /// Index of the node whose cycle completed.
    pub node: usize,
    /// The committed scale after the cycle.
    pub scale: f64,
}

/// Fixed-length chain of glyph nodes. Neighbor relations are implicit via
/// index arithmetic; exactly one node is active at any time, and only the
/// active node's state mutates during a run.
#[derive(Clone, Debug)]
pub struct Chain {
    nodes: [GlyphAnim; NODES],
    active: usize,
    travel: i64,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// All nodes hidden, cursor at index 0, traveling forward.
    pub fn new() -> Self {
        Self {
            nodes: [GlyphAnim::default(); NODES],
            active: 0,
            travel: 1,
        }
    }

    /// Index of the currently active node.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Current traversal direction, `+1` or `-1`.
    pub fn travel(&self) -> i64 {
        self.travel
    }

    /// Animation state of node `index`. Panics when out of `[0, NODES)`.
    pub fn node(&self, index: usize) -> &GlyphAnim {
        &self.nodes[index]
    }

    /// Start a cycle on the active node. Returns `false` (no-op) while one
    /// is already running.
    pub fn begin(&mut self) -> bool {
        self.nodes[self.active].begin()
    }

    /// Advance the active node one tick. When the cycle settles, move the
    /// cursor one step along the travel direction; when that step would
    /// leave the chain, flip the direction instead and keep the cursor in
    /// place, so the boundary node toggles again on the next run.
    pub fn update(&mut self) -> Option<Settle> {
        let committed = self.nodes[self.active].step()?;
        let event = Settle {
            node: self.active,
            scale: committed,
        };
        let next = self.active as i64 + self.travel;
        if next < 0 || next >= NODES as i64 {
            self.travel = -self.travel;
        } else {
            self.active = next as usize;
        }
        Some(event)
    }
}
