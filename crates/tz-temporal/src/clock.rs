//! Wall-clock sources.
//!
//! Nothing in this crate calls `Utc::now()` directly: "now" always comes
//! from a [`Clock`] held by a [`TimeContext`](crate::TimeContext). Production
//! code uses [`SystemClock`]; tests and simulations use [`ManualClock`] to pin
//! or advance the current moment.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::Result;
use crate::timezone::out_of_range;

/// A source of the current instant.
pub trait Clock: fmt::Debug + Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Jump to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move the clock by `delta` (negative values move it backwards).
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::OutOfRange`](crate::TemporalError::OutOfRange)
    /// if the new instant is not representable; the clock is left unchanged.
    pub fn advance(&self, delta: TimeDelta) -> Result<DateTime<Utc>> {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        let next = now
            .checked_add_signed(delta)
            .ok_or_else(|| out_of_range(format!("{} advanced by {delta}", *now)))?;
        *now = next;
        Ok(next)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.year() >= 2024);
    }

    #[test]
    fn test_manual_clock_is_pinned() {
        let t = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let clock = ManualClock::new(t);
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let t = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let clock = ManualClock::new(t);

        let advanced = clock.advance(TimeDelta::days(1)).unwrap();
        assert_eq!(advanced.day(), 11);
        assert_eq!(clock.now(), advanced);

        clock.set(t);
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn test_manual_clock_advance_overflow_leaves_clock() {
        let clock = ManualClock::new(DateTime::<Utc>::MAX_UTC);
        assert!(clock.advance(TimeDelta::seconds(1)).is_err());
        assert_eq!(clock.now(), DateTime::<Utc>::MAX_UTC);
    }
}
