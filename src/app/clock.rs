//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps out the rest of each frame slot and reports the real elapsed
/// time in milliseconds, like a game-loop `tick(fps)`.
///
/// Sub-millisecond leftovers are carried into the next tick, so the sum of
/// reported ticks tracks wall time.
#[derive(Debug)]
pub struct FrameClock {
    slot: Duration,
    last: Instant,
    carry: Duration,
}

impl FrameClock {
    pub fn new(rate_hz: u32) -> Self {
        let rate = rate_hz.max(1);
        Self {
            slot: Duration::from_secs(1) / rate,
            last: Instant::now(),
            carry: Duration::ZERO,
        }
    }

    pub fn slot(&self) -> Duration {
        self.slot
    }

    /// Wait for the next slot; returns milliseconds since the previous tick.
    pub fn tick(&mut self) -> u32 {
        let spent = self.last.elapsed();
        if spent < self.slot {
            thread::sleep(self.slot - spent);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        self.report(elapsed)
    }

    /// Whole milliseconds of `elapsed` plus the carried remainder.
    fn report(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let ms = u32::try_from(self.carry.as_millis()).unwrap_or(u32::MAX);
        self.carry = self.carry.saturating_sub(Duration::from_millis(u64::from(ms)));
        ms
    }
}
