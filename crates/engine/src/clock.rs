//! Fixed-cadence drop clock.
//!
//! The core never reads time. Hosts feed elapsed milliseconds into a
//! [`DropClock`] and turn every due tick into a `GameEvent::Tick`.

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl DropClock {
    /// Clock firing every `interval_ms` (clamped to at least 1ms)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add elapsed time and return how many ticks are now due.
    ///
    /// The remainder carries over, so uneven frame times do not drift.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms as u64 + elapsed_ms as u64;
        let due = total / self.interval_ms as u64;
        self.accumulated_ms = (total % self.interval_ms as u64) as u32;
        due.min(u32::MAX as u64) as u32
    }

    /// Milliseconds until the next tick is due
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.accumulated_ms
    }

    /// Drop any partial interval (used after restart)
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

impl Default for DropClock {
    fn default() -> Self {
        Self::new(DROP_INTERVAL_MS)
    }
}
