use std::time::{Duration, Instant};

/// Input poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Session tick period in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Get input poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// Turns wall-clock time into whole session ticks
///
/// The event loop wakes up more often than once per period; `due` reports how
/// many full periods passed since the last tick so a stalled loop catches up.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            last_tick: now,
        }
    }

    /// Restart the period from `now` (used when a session starts)
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Number of whole periods elapsed since the last tick
    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        let ticks = u32::try_from(elapsed.as_nanos() / self.period.as_nanos()).unwrap_or(u32::MAX);
        if ticks > 0 {
            // Keep the remainder so ticks stay aligned to the period
            self.last_tick = self
                .period
                .checked_mul(ticks)
                .and_then(|advance| self.last_tick.checked_add(advance))
                .unwrap_or(now);
        }
        ticks
    }
}
