//! Elapsed-time counters for gravity and the line-clear flash
//!
//! Nothing here reads a system clock. Callers pass the time that passed
//! since the previous update, which keeps the simulation deterministic.

use std::time::Duration;

/// Gravity timer: fires once the accumulated time reaches the interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    elapsed: Duration,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` and report whether a gravity tick is due.
    /// At most one tick fires per call and the counter restarts from zero.
    pub fn advance(&mut self, dt: Duration, interval: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Restart the timer, e.g. when a new piece spawns
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
