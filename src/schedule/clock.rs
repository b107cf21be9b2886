//! Wall-clock abstraction for timestamp labels.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta};

/// Source of the current local time.
pub trait Clock: Send + std::fmt::Debug {
    fn now(&self) -> DateTime<Local>;
}

impl<T: Clock + Sync + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Format a timestamp label with a strftime pattern.
pub fn format_label(time: &DateTime<Local>, pattern: &str) -> String {
    time.format(pattern).to_string()
}
