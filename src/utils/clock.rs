//! Clock implementations

use chrono::{Duration, NaiveDateTime};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::traits::Clock;

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Clock that advances by a fixed step every time it is read
#[derive(Debug)]
pub struct SteppingClock {
    start: NaiveDateTime,
    step: Duration,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// The first read returns `start`, each following read adds `step`
    pub fn new(start: NaiveDateTime, step: Duration) -> Self {
        Self {
            start,
            step,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        // Saturates at NaiveDateTime::MAX
        i32::try_from(tick)
            .ok()
            .and_then(|tick| self.step.checked_mul(tick))
            .and_then(|offset| self.start.checked_add_signed(offset))
            .unwrap_or(NaiveDateTime::MAX)
    }
}
