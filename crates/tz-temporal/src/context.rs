//! The ambient environment values are built against: a clock and a default
//! timezone.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::clock::{Clock, SystemClock};
use crate::config::Settings;

/// Clock plus process default timezone.
///
/// Cloning is cheap; clones share the same clock.
#[derive(Clone)]
pub struct TimeContext {
    clock: Arc<dyn Clock>,
    settings: Settings,
}

impl TimeContext {
    pub fn new(clock: Arc<dyn Clock>, settings: Settings) -> Self {
        tracing::debug!(
            default_timezone = settings.default_timezone.name(),
            ?clock,
            "time context created"
        );
        Self { clock, settings }
    }

    /// The operating system clock with the default timezone taken from `TZ`.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Settings::from_env())
    }

    /// `clock` with `default_timezone` as the process default.
    pub fn with_clock(clock: Arc<dyn Clock>, default_timezone: Tz) -> Self {
        Self::new(clock, Settings { default_timezone })
    }

    pub fn default_timezone(&self) -> Tz {
        self.settings.default_timezone
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// One reading of the clock.
    pub fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// One reading of the clock, in the default timezone.
    pub fn now(&self) -> DateTime<Tz> {
        self.now_in(self.default_timezone())
    }

    /// One reading of the clock, in `tz`.
    pub fn now_in(&self, tz: Tz) -> DateTime<Tz> {
        self.clock.now().with_timezone(&tz)
    }

    /// The calendar day it currently is in `tz`.
    pub fn today_in(&self, tz: Tz) -> NaiveDate {
        self.now_in(tz).date_naive()
    }
}

impl fmt::Debug for TimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeContext")
            .field("clock", &self.clock)
            .field("default_timezone", &self.settings.default_timezone.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{TimeZone, Timelike};

    fn context(default_timezone: Tz) -> TimeContext {
        // 2024-03-10 03:00 UTC is still March 9 in New York
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 3, 0, 0).unwrap());
        TimeContext::with_clock(Arc::new(clock), default_timezone)
    }

    #[test]
    fn test_now_uses_default_timezone() {
        let ctx = context(Tz::Asia__Tokyo);
        let now = ctx.now();
        assert_eq!(now.timezone(), Tz::Asia__Tokyo);
        assert_eq!(now.hour(), 12);
        assert_eq!(now, ctx.now_utc());
    }

    #[test]
    fn test_today_depends_on_timezone() {
        let ctx = context(Tz::UTC);
        assert_eq!(
            ctx.today_in(Tz::UTC),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(
            ctx.today_in(Tz::America__New_York),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_clones_share_clock() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
        ));
        let ctx = TimeContext::with_clock(clock.clone(), Tz::UTC);
        let copy = ctx.clone();

        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(copy.now_utc(), later);
    }

    #[test]
    fn test_system_context_reads_clock() {
        let ctx = TimeContext::system();
        let before = Utc::now();
        assert!(ctx.now_utc() >= before);
    }
}
