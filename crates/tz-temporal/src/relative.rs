//! Calendar days expressed relative to "today".
//!
//! A [`RelativeCalendarDate`] stores a day offset and a timezone, never an
//! absolute point in time. Each read asks the clock what day it is in the
//! stored timezone and shifts that by the offset, so "tomorrow" keeps meaning
//! tomorrow after midnight has passed.
//!
//! # Resolution
//!
//! - one clock reading per call, localized to the stored timezone
//! - `today + days_since_today` as a naive date
//! - midnight of that date in the stored timezone
//!
//! Nothing is cached between calls. An offset that pushes the date past
//! chrono's range is accepted at construction and reported as
//! [`TemporalError::OutOfRange`](crate::TemporalError::OutOfRange) when read,
//! comparisons included.

use chrono::{NaiveDate, TimeDelta};
use chrono_tz::Tz;

use crate::context::TimeContext;
use crate::date::CalendarDate;
use crate::error::Result;
use crate::instant::AbsoluteInstant;
use crate::temporal::Temporal;
use crate::timezone::{
    abbreviation, out_of_range, resolve_timezone, shift_days, start_of_day, TimezoneLike,
};

/// A day offset from today, in a timezone.
///
/// Two reads of the same value can disagree if the clock crosses midnight in
/// the stored timezone between them. That includes comparisons: they are
/// decided at comparison time, not at construction time.
#[derive(Debug, Clone)]
pub struct RelativeCalendarDate {
    days_since_today: i64,
    timezone: Tz,
    context: TimeContext,
}

impl RelativeCalendarDate {
    /// `days_since_today` days from today in `timezone`, or in the context's
    /// default timezone when `timezone` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tz_temporal::{CalendarDate, RelativeCalendarDate, Temporal, TimeContext};
    ///
    /// let ctx = TimeContext::system();
    /// let tomorrow = RelativeCalendarDate::new(1, Some("UTC".into()), &ctx).unwrap();
    /// let today = CalendarDate::today_in_timezone("UTC", &ctx).unwrap();
    /// assert!(tomorrow.greater(&today).unwrap());
    /// ```
    pub fn new(
        days_since_today: i64,
        timezone: Option<TimezoneLike>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        let timezone = match timezone {
            Some(timezone) => resolve_timezone(timezone)?,
            None => ctx.default_timezone(),
        };
        Ok(Self {
            days_since_today,
            timezone,
            context: ctx.clone(),
        })
    }

    /// Today in the default timezone.
    pub fn today(ctx: &TimeContext) -> Self {
        Self {
            days_since_today: 0,
            timezone: ctx.default_timezone(),
            context: ctx.clone(),
        }
    }

    /// Today in `timezone`.
    pub fn today_in_timezone(timezone: impl Into<TimezoneLike>, ctx: &TimeContext) -> Result<Self> {
        Self::new(0, Some(timezone.into()), ctx)
    }

    /// Capture how many days `date` lies from today, both days taken in
    /// `date`'s timezone.
    ///
    /// The offset is fixed here; later reads apply it to whatever today is
    /// then.
    pub fn from_calendar_date(date: &CalendarDate, ctx: &TimeContext) -> Self {
        let timezone = date.timezone();
        let today = ctx.today_in(timezone);
        let days_since_today = date.to_naive_date().signed_duration_since(today).num_days();
        Self {
            days_since_today,
            timezone,
            context: ctx.clone(),
        }
    }

    /// [`from_calendar_date`](Self::from_calendar_date) for `date` at
    /// midnight in `timezone`.
    pub fn from_naive_date(
        date: NaiveDate,
        timezone: impl Into<TimezoneLike>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        let date = CalendarDate::from_naive_date(date, timezone)?;
        Ok(Self::from_calendar_date(&date, ctx))
    }

    pub fn days_since_today(&self) -> i64 {
        self.days_since_today
    }

    /// The naive day this value denotes right now.
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        self.resolve_from(self.context.today_in(self.timezone))
    }

    fn resolve_from(&self, today: NaiveDate) -> Result<NaiveDate> {
        let date = shift_days(today, self.days_since_today)?;
        tracing::trace!(
            days_since_today = self.days_since_today,
            timezone = self.timezone.name(),
            %today,
            %date,
            "resolved relative date"
        );
        Ok(date)
    }

    /// The day this value denotes right now, at midnight in the stored timezone.
    pub fn to_calendar_date(&self) -> Result<CalendarDate> {
        CalendarDate::from_naive_date(self.to_naive_date()?, self.timezone)
    }

    /// The midnight instant this value denotes right now.
    pub fn to_absolute_instant(&self) -> Result<AbsoluteInstant> {
        Ok(self.to_calendar_date()?.to_absolute_instant())
    }

    fn with_days(&self, days_since_today: i64) -> Self {
        Self {
            days_since_today,
            timezone: self.timezone,
            context: self.context.clone(),
        }
    }
}

impl Temporal for RelativeCalendarDate {
    /// Resolves against the current clock.
    fn to_instant(&self) -> Result<AbsoluteInstant> {
        self.to_absolute_instant()
    }

    fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The abbreviation in force at the resolved midnight. Falls back to
    /// the abbreviation at the current moment when the offset is out of range.
    fn timezone_name(&self) -> String {
        let now = self.context.now_in(self.timezone);
        let midnight = self
            .resolve_from(now.date_naive())
            .and_then(|date| start_of_day(&self.timezone, date));
        match midnight {
            Ok(midnight) => abbreviation(&midnight),
            Err(_) => abbreviation(&now),
        }
    }

    /// Only the timezone changes; "today" is computed there from now on.
    fn to_timezone(&self, timezone: impl Into<TimezoneLike>) -> Result<Self> {
        Ok(Self {
            days_since_today: self.days_since_today,
            timezone: resolve_timezone(timezone)?,
            context: self.context.clone(),
        })
    }

    /// Applies the whole days of `duration`; the remainder is dropped.
    fn add(&self, duration: TimeDelta) -> Result<Self> {
        let days = self
            .days_since_today
            .checked_add(duration.num_days())
            .ok_or_else(|| out_of_range(format!("{} days + {duration}", self.days_since_today)))?;
        Ok(self.with_days(days))
    }

    /// Applies the whole days of `duration`; the remainder is dropped.
    fn subtract(&self, duration: TimeDelta) -> Result<Self> {
        let days = self
            .days_since_today
            .checked_sub(duration.num_days())
            .ok_or_else(|| out_of_range(format!("{} days - {duration}", self.days_since_today)))?;
        Ok(self.with_days(days))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
