//! Timezone-attached points in time.

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

use crate::context::TimeContext;
use crate::date::CalendarDate;
use crate::error::Result;
use crate::temporal::{
    attach_timezone, checked_add, checked_sub, zoned_from_timestamp, Temporal, TemporalInput,
};
use crate::timezone::{abbreviation, resolve_timezone, TimezoneLike};

/// A point in time with a timezone attached. Never naive.
///
/// Equality and ordering compare the instant only: the same moment seen from
/// two timezones is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteInstant {
    datetime: DateTime<Tz>,
}

impl AbsoluteInstant {
    /// Build an instant from a naive or zoned input.
    ///
    /// Naive input is read as wall-clock time in `timezone`, or in the
    /// context's default timezone when `timezone` is `None`.
    ///
    /// # Errors
    ///
    /// [`TemporalError::ConflictingTimezoneSpecification`](crate::TemporalError::ConflictingTimezoneSpecification)
    /// if `input` is zoned and `timezone` is also given; resolver errors for
    /// a bad `timezone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tz_temporal::{AbsoluteInstant, Temporal, TimeContext};
    ///
    /// let ctx = TimeContext::system();
    /// let naive = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let instant = AbsoluteInstant::new(naive, Some("America/New_York".into()), &ctx).unwrap();
    /// assert_eq!(instant.timezone_name(), "EDT");
    /// ```
    pub fn new(
        input: impl Into<TemporalInput>,
        timezone: Option<TimezoneLike>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        Ok(Self::from_zoned(attach_timezone(input.into(), timezone, ctx)?))
    }

    /// Wrap an already-zoned datetime.
    pub fn from_zoned(datetime: DateTime<Tz>) -> Self {
        Self { datetime }
    }

    /// The current instant in the default timezone.
    pub fn now(ctx: &TimeContext) -> Self {
        Self::from_zoned(ctx.now())
    }

    /// The current instant in `timezone`.
    pub fn now_in_timezone(timezone: impl Into<TimezoneLike>, ctx: &TimeContext) -> Result<Self> {
        Ok(Self::from_zoned(ctx.now_in(resolve_timezone(timezone)?)))
    }

    /// Build an instant from a Unix timestamp in seconds or in milliseconds.
    ///
    /// Exactly one of `timestamp_in_s` and `timestamp_in_ms` must be given.
    /// The result is expressed in `timezone`, or in the default timezone.
    ///
    /// # Errors
    ///
    /// [`MissingTimestampArgument`](crate::TemporalError::MissingTimestampArgument)
    /// when neither is given,
    /// [`ConflictingTimestampArguments`](crate::TemporalError::ConflictingTimestampArguments)
    /// when both are.
    pub fn from_timestamp(
        timestamp_in_s: Option<i64>,
        timestamp_in_ms: Option<i64>,
        timezone: Option<TimezoneLike>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        zoned_from_timestamp(timestamp_in_s, timestamp_in_ms, timezone, ctx).map(Self::from_zoned)
    }

    /// The calendar day of this instant, in its own timezone. Drops the time of day.
    pub fn to_calendar_date(&self) -> Result<CalendarDate> {
        CalendarDate::from_instant(self)
    }

    pub fn as_datetime(&self) -> &DateTime<Tz> {
        &self.datetime
    }
}

impl Temporal for AbsoluteInstant {
    fn to_instant(&self) -> Result<AbsoluteInstant> {
        Ok(*self)
    }

    fn timezone(&self) -> Tz {
        self.datetime.timezone()
    }

    fn timezone_name(&self) -> String {
        abbreviation(&self.datetime)
    }

    fn to_timezone(&self, timezone: impl Into<TimezoneLike>) -> Result<Self> {
        let tz = resolve_timezone(timezone)?;
        Ok(Self::from_zoned(self.datetime.with_timezone(&tz)))
    }

    fn add(&self, duration: TimeDelta) -> Result<Self> {
        checked_add(&self.datetime, duration).map(Self::from_zoned)
    }

    fn subtract(&self, duration: TimeDelta) -> Result<Self> {
        checked_sub(&self.datetime, duration).map(Self::from_zoned)
    }
}

impl From<DateTime<Tz>> for AbsoluteInstant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_zoned(datetime)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
