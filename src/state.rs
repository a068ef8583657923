//! Per-glyph animation state machine.

use crate::stagger;

/// Mutable animation record for a single glyph.
///
/// `scale` is the current eased progress (may transiently leave `[0, 1]`
/// before clamping), `committed` the settled endpoint of the last completed
/// cycle (always exactly `0.0` or `1.0` between cycles), and `direction` is
/// `0` while idle, otherwise `+/-1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct GlyphAnim {
    scale: f64,
    direction: f64,
    committed: f64,
}

impl GlyphAnim {
    /// Current eased progress.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Settled endpoint of the last completed cycle.
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// True while a cycle is in flight.
    pub fn is_running(&self) -> bool {
        self.direction != 0.0
    }

    /// Advance one tick. Returns the newly committed scale when the cycle
    /// settles, `None` while still in flight. A no-op once idle, so a missed
    /// or repeated tick merely delays settlement.
    pub fn step(&mut self) -> Option<f64> {
        if self.direction == 0.0 {
            return None;
        }
        self.scale += stagger::frame_increment(self.scale, self.direction);
        if (self.scale - self.committed).abs() > 1.0 {
            // Overshot the far endpoint: clamp and settle.
            self.scale = self.committed + self.direction;
            self.direction = 0.0;
            self.committed = self.scale;
            return Some(self.committed);
        }
        None
    }

    /// Start a cycle toward the opposite endpoint: `+1` from hidden, `-1`
    /// from revealed. Returns `false` while a cycle is already running.
    pub fn begin(&mut self) -> bool {
        if self.direction != 0.0 {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.committed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(anim: &mut GlyphAnim) -> (f64, usize) {
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 10_000, "cycle did not terminate");
            if let Some(committed) = anim.step() {
                return (committed, ticks);
            }
        }
    }

    #[test]
    fn reveal_terminates_at_exactly_one() {
        let mut anim = GlyphAnim::default();
        assert!(anim.begin());
        let (committed, _) = settle(&mut anim);
        assert_eq!(committed, 1.0);
        assert_eq!(anim.scale(), 1.0);
        assert!(!anim.is_running());
    }

    #[test]
    fn hide_returns_to_exactly_zero() {
        let mut anim = GlyphAnim::default();
        assert!(anim.begin());
        settle(&mut anim);

        assert!(anim.begin());
        let (committed, _) = settle(&mut anim);
        assert_eq!(committed, 0.0);
        assert_eq!(anim.scale(), 0.0);
    }

    #[test]
    fn begin_refuses_while_running() {
        let mut anim = GlyphAnim::default();
        assert!(anim.begin());
        let before = anim;
        assert!(!anim.begin());
        assert_eq!(anim, before);
    }

    #[test]
    fn step_is_idempotent_once_idle() {
        let mut anim = GlyphAnim::default();
        assert!(anim.step().is_none());
        let before = anim;
        assert!(anim.step().is_none());
        assert_eq!(anim, before);
    }

    #[test]
    fn reveal_crawls_then_jumps() {
        // The slow phase moves in 1/8 steps of the base gap; the fast phase
        // takes full steps. Settlement therefore takes far more ticks than
        // 1 / SC_GAP.
        let mut anim = GlyphAnim::default();
        assert!(anim.begin());
        let (_, ticks) = settle(&mut anim);
        assert!(ticks > 40, "expected a long slow phase, got {ticks} ticks");
    }
}
