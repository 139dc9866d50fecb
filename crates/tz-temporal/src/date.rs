//! Timezone-attached calendar days.

use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;

use crate::context::TimeContext;
use crate::error::Result;
use crate::instant::AbsoluteInstant;
use crate::temporal::{
    attach_timezone, checked_add, checked_sub, zoned_from_timestamp, Temporal, TemporalInput,
};
use crate::timezone::{abbreviation, resolve_timezone, start_of_day, TimezoneLike};

/// A calendar day in a timezone, held as midnight of that day.
///
/// Every constructor yields midnight. [`Temporal::to_timezone`] and
/// [`Temporal::add`]/[`Temporal::subtract`] keep the absolute instant
/// instead, so a date moved to another timezone, or shifted by a sub-day
/// duration, no longer sits on a local midnight. Use whole-day durations to
/// stay on calendar boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    datetime: DateTime<Tz>,
}

impl CalendarDate {
    /// Build a date from a naive or zoned input, dropping any time of day.
    ///
    /// A zoned input is truncated in its own timezone. A naive input is
    /// placed in `timezone`, or in the context's default timezone.
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
    /// use tz_temporal::{CalendarDate, Temporal, TimeContext};
    ///
    /// let ctx = TimeContext::system();
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let date = CalendarDate::new(day, Some("America/New_York".into()), &ctx).unwrap();
    /// assert_eq!(date.to_naive_date(), day);
    /// assert_eq!(date.timezone_name(), "EST");
    /// ```
    pub fn new(
        input: impl Into<TemporalInput>,
        timezone: Option<TimezoneLike>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        Self::truncate(&attach_timezone(input.into(), timezone, ctx)?)
    }

    /// Midnight of `date` in `timezone`.
    pub fn from_naive_date(date: NaiveDate, timezone: impl Into<TimezoneLike>) -> Result<Self> {
        let tz = resolve_timezone(timezone)?;
        Ok(Self {
            datetime: start_of_day(&tz, date)?,
        })
    }

    /// The calendar day of `instant` in the instant's own timezone.
    pub fn from_instant(instant: &AbsoluteInstant) -> Result<Self> {
        Self::truncate(instant.as_datetime())
    }

    /// Today in the default timezone.
    pub fn today(ctx: &TimeContext) -> Result<Self> {
        Self::truncate(&ctx.now())
    }

    /// Today as observed in `timezone`.
    pub fn today_in_timezone(timezone: impl Into<TimezoneLike>, ctx: &TimeContext) -> Result<Self> {
        Self::truncate(&ctx.now_in(resolve_timezone(timezone)?))
    }

    /// The calendar day containing a Unix timestamp given in seconds or in
    /// milliseconds, in `timezone` or in the default timezone.
    ///
    /// # Errors
    ///
    /// Same as [`AbsoluteInstant::from_timestamp`].
    pub fn from_timestamp(
        timestamp_in_s: Option<i64>,
        timestamp_in_ms: Option<i64>,
        timezone: Option<TimezoneLike>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        Self::truncate(&zoned_from_timestamp(
            timestamp_in_s,
            timestamp_in_ms,
            timezone,
            ctx,
        )?)
    }

    /// This date's instant, as an [`AbsoluteInstant`] in the same timezone.
    pub fn to_absolute_instant(&self) -> AbsoluteInstant {
        AbsoluteInstant::from_zoned(self.datetime)
    }

    /// Year, month and day with the timezone stripped.
    pub fn to_naive_date(&self) -> NaiveDate {
        self.datetime.date_naive()
    }

    pub fn as_datetime(&self) -> &DateTime<Tz> {
        &self.datetime
    }

    fn truncate(datetime: &DateTime<Tz>) -> Result<Self> {
        Ok(Self {
            datetime: start_of_day(&datetime.timezone(), datetime.date_naive())?,
        })
    }
}

impl Temporal for CalendarDate {
    fn to_instant(&self) -> Result<AbsoluteInstant> {
        Ok(self.to_absolute_instant())
    }

    fn timezone(&self) -> Tz {
        self.datetime.timezone()
    }

    fn timezone_name(&self) -> String {
        abbreviation(&self.datetime)
    }

    fn to_timezone(&self, timezone: impl Into<TimezoneLike>) -> Result<Self> {
        let tz = resolve_timezone(timezone)?;
        Ok(Self {
            datetime: self.datetime.with_timezone(&tz),
        })
    }

    fn add(&self, duration: TimeDelta) -> Result<Self> {
        Ok(Self {
            datetime: checked_add(&self.datetime, duration)?,
        })
    }

    fn subtract(&self, duration: TimeDelta) -> Result<Self> {
        Ok(Self {
            datetime: checked_sub(&self.datetime, duration)?,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
