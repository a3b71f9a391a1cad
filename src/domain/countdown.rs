use super::enums::CountdownStatus;
use crate::error::{IsoStudyError, Result};
use std::fmt;

/// Remaining time as an hours/minutes/seconds triple
///
/// Minutes and seconds always stay within 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    pub const ZERO: Hms = Hms {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Build from a total number of seconds
    #[cfg(test)]
    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            hours: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Subtract one second, borrowing seconds from minutes and minutes from hours.
    /// Saturates at zero.
    fn decrement(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Session countdown state machine
///
/// `Idle -> Running -> Expired | Cancelled`. Ticks outside `Running` do nothing.
#[derive(Debug, Clone)]
pub struct Countdown {
    status: CountdownStatus,
    initial: Hms,
    remaining: Hms,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            status: CountdownStatus::Idle,
            initial: Hms::ZERO,
            remaining: Hms::ZERO,
        }
    }

    /// Start counting down from the given duration
    pub fn start(&mut self, hours: u32, minutes: u32, seconds: u32) -> Result<()> {
        if self.status != CountdownStatus::Idle {
            return Err(IsoStudyError::AlreadyStarted);
        }
        if minutes > 59 {
            return Err(IsoStudyError::FieldOutOfRange {
                field: "minutes",
                value: minutes,
                max: 59,
            });
        }
        if seconds > 59 {
            return Err(IsoStudyError::FieldOutOfRange {
                field: "seconds",
                value: seconds,
                max: 59,
            });
        }

        let duration = Hms::new(hours, minutes, seconds);
        if duration.is_zero() {
            return Err(IsoStudyError::InvalidDuration);
        }

        self.initial = duration;
        self.remaining = duration;
        self.status = CountdownStatus::Running;
        Ok(())
    }

    /// Advance by one second. Returns the new remaining time, or `None` when
    /// the countdown is not running.
    pub fn tick(&mut self) -> Option<Hms> {
        if self.status != CountdownStatus::Running {
            return None;
        }

        self.remaining.decrement();
        if self.remaining.is_zero() {
            self.status = CountdownStatus::Expired;
        }
        Some(self.remaining)
    }

    /// Stop the countdown early
    pub fn cancel(&mut self) -> bool {
        if self.status == CountdownStatus::Running {
            self.status = CountdownStatus::Cancelled;
            true
        } else {
            false
        }
    }

    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    pub fn remaining(&self) -> Hms {
        self.remaining
    }

    pub fn initial(&self) -> Hms {
        self.initial
    }

    /// Fraction of the session already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let total = self.initial.total_seconds();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total - self.remaining.total_seconds();
        elapsed as f64 / total as f64
    }
}
