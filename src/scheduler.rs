//! Frame scheduler: the Idle/Running gate that decides whether a paint pass
//! also runs an update tick.
//!
//! The scheduler never sleeps. Hosts that drive a real-time loop should wait
//! [`crate::config::TICK_DELAY_MS`] between ticks; headless drivers (the CLI,
//! tests) tick as fast as they can paint. A timer that fails or skips simply
//! delays the next tick: the state machine is idempotent across retries.

/// Two-state gate: `Idle` until a tap starts a run, `Running` until the
/// active node's cycle settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scheduler {
    running: bool,
}

impl Scheduler {
    /// New scheduler in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Running. Returns `false` (no-op) when already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Running -> Idle. No-op when already idle.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// True while a run is in progress.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_transitions_idle_to_running_once() {
        let mut s = Scheduler::new();
        assert!(!s.is_running());
        assert!(s.start());
        assert!(s.is_running());
        assert!(!s.start());
        assert!(s.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut s = Scheduler::new();
        s.stop();
        assert!(!s.is_running());
        s.start();
        s.stop();
        assert!(!s.is_running());
        s.stop();
        assert!(!s.is_running());
    }
}
