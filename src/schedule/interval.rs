//! Recurring timer driven by caller-supplied instants.

use std::time::{Duration, Instant};

/// Default period between simulation ticks.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(5000);

/// A timer that reports when a recurring task is due.
///
/// The caller supplies the current instant, so tests can drive the timer
/// without sleeping.
pub trait RecurringTimer {
    /// Returns `true` if the task should run at `now`, and arms the next run.
    fn poll(&mut self, now: Instant) -> bool;

    /// Period between runs.
    fn period(&self) -> Duration;

    /// Time left until the next run, or zero if it is already due.
    fn remaining(&self, now: Instant) -> Duration;
}

/// Fires on the first poll, then once per elapsed period.
///
/// Runs are scheduled from the previous due time, so a late poll does not
/// push later runs back. Missed periods are not replayed: after a stall of a
/// full period or more the timer fires once and re-arms from that point.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }
}

impl RecurringTimer for Interval {
    fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) if now - due < self.period => {
                self.next_due = Some(due + self.period);
                true
            }
            _ => {
                self.next_due = Some(now + self.period);
                true
            }
        }
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.next_due.map(|due| due.saturating_duration_since(now)).unwrap_or(Duration::ZERO)
    }
}
