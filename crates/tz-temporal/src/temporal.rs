//! The comparable-temporal contract shared by every value type.
//!
//! [`AbsoluteInstant`], [`CalendarDate`](crate::CalendarDate) and
//! [`RelativeCalendarDate`](crate::RelativeCalendarDate) all implement
//! [`Temporal`], so any two of them can be compared: both sides are reduced to
//! an [`AbsoluteInstant`] with [`Temporal::to_instant`] and those instants are
//! compared. For relative dates the reduction reads the clock, so the outcome
//! of a comparison can change once "today" moves on, and it can fail when the
//! offset from today leaves the representable range.
//!
//! This module also holds the construction rule the two zoned types share:
//! naive input gets a timezone attached, zoned input keeps its own, and
//! supplying both a zoned input and an explicit timezone is rejected.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::context::TimeContext;
use crate::error::{Result, TemporalError};
use crate::instant::AbsoluteInstant;
use crate::timezone::{localize, out_of_range, resolve_timezone, TimezoneLike};

// ── Temporal ────────────────────────────────────────────────────────────────

/// Capabilities common to instants, calendar dates and relative dates.
pub trait Temporal {
    /// Reduce to an absolute instant. Used for every comparison.
    ///
    /// # Errors
    ///
    /// [`TemporalError::OutOfRange`] if the value cannot be placed on the
    /// timeline, which only happens for a relative date whose offset runs past
    /// the representable range from today.
    fn to_instant(&self) -> Result<AbsoluteInstant>;

    /// The attached timezone handle.
    fn timezone(&self) -> Tz;

    /// The timezone abbreviation in force at this value's instant.
    fn timezone_name(&self) -> String;

    /// Re-express this value in another timezone.
    fn to_timezone(&self, timezone: impl Into<TimezoneLike>) -> Result<Self>
    where
        Self: Sized;

    /// Add `duration`.
    fn add(&self, duration: TimeDelta) -> Result<Self>
    where
        Self: Sized;

    /// Subtract `duration`.
    fn subtract(&self, duration: TimeDelta) -> Result<Self>
    where
        Self: Sized;

    /// Whether the attached timezone is `timezone`.
    ///
    /// # Errors
    ///
    /// [`TemporalError::InvalidArgument`] if `timezone` names no timezone,
    /// or the resolver's error for an unknown identifier.
    fn is_in_timezone(&self, timezone: impl Into<TimezoneLike>) -> Result<bool>
    where
        Self: Sized,
    {
        let other = resolve_timezone(timezone)?;
        Ok(self.timezone() == other)
    }

    /// Three-way comparison of the two values' instants.
    ///
    /// # Errors
    ///
    /// Propagates the error of either side's [`Temporal::to_instant`].
    fn compare<T: Temporal>(&self, other: &T) -> Result<Ordering> {
        Ok(self.to_instant()?.cmp(&other.to_instant()?))
    }

    fn equals<T: Temporal>(&self, other: &T) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    fn greater<T: Temporal>(&self, other: &T) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    fn greater_or_equal<T: Temporal>(&self, other: &T) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    fn less<T: Temporal>(&self, other: &T) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    fn less_or_equal<T: Temporal>(&self, other: &T) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }
}

// ── Construction input ──────────────────────────────────────────────────────

/// Input accepted by the zoned constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum TemporalInput {
    /// A wall-clock datetime with no timezone.
    Naive(NaiveDateTime),
    /// A datetime that already carries a timezone.
    Zoned(DateTime<Tz>),
}

impl From<NaiveDateTime> for TemporalInput {
    fn from(naive: NaiveDateTime) -> Self {
        TemporalInput::Naive(naive)
    }
}

/// A naive date stands for its midnight.
impl From<NaiveDate> for TemporalInput {
    fn from(date: NaiveDate) -> Self {
        TemporalInput::Naive(date.and_time(NaiveTime::MIN))
    }
}

impl From<DateTime<Tz>> for TemporalInput {
    fn from(dt: DateTime<Tz>) -> Self {
        TemporalInput::Zoned(dt)
    }
}

impl From<DateTime<Utc>> for TemporalInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TemporalInput::Zoned(dt.with_timezone(&Tz::UTC))
    }
}

/// Turn `input` into a zoned datetime.
///
/// A zoned input is kept as is. A naive input is read as wall-clock time in
/// `timezone`, or in the context's default timezone when none is given.
pub(crate) fn attach_timezone(
    input: TemporalInput,
    timezone: Option<TimezoneLike>,
    ctx: &TimeContext,
) -> Result<DateTime<Tz>> {
    match (input, timezone) {
        (TemporalInput::Zoned(_), Some(_)) => {
            Err(TemporalError::ConflictingTimezoneSpecification)
        }
        (TemporalInput::Zoned(dt), None) => Ok(dt),
        (TemporalInput::Naive(naive), Some(timezone)) => {
            localize(&resolve_timezone(timezone)?, &naive)
        }
        (TemporalInput::Naive(naive), None) => localize(&ctx.default_timezone(), &naive),
    }
}

/// Convert a Unix timestamp given in exactly one unit into a zoned datetime.
///
/// With no timezone the context's default timezone is used.
pub(crate) fn zoned_from_timestamp(
    timestamp_in_s: Option<i64>,
    timestamp_in_ms: Option<i64>,
    timezone: Option<TimezoneLike>,
    ctx: &TimeContext,
) -> Result<DateTime<Tz>> {
    let utc = match (timestamp_in_s, timestamp_in_ms) {
        (None, None) => return Err(TemporalError::MissingTimestampArgument),
        (Some(_), Some(_)) => return Err(TemporalError::ConflictingTimestampArguments),
        (Some(secs), None) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| out_of_range(format!("timestamp {secs}s")))?,
        (None, Some(millis)) => DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| out_of_range(format!("timestamp {millis}ms")))?,
    };

    let tz = match timezone {
        Some(timezone) => resolve_timezone(timezone)?,
        None => ctx.default_timezone(),
    };
    Ok(utc.with_timezone(&tz))
}

/// `dt + duration`, or an error when the result is not representable.
pub(crate) fn checked_add(dt: &DateTime<Tz>, duration: TimeDelta) -> Result<DateTime<Tz>> {
    dt.checked_add_signed(duration)
        .ok_or_else(|| out_of_range(format!("{dt} + {duration}")))
}

/// `dt - duration`, or an error when the result is not representable.
pub(crate) fn checked_sub(dt: &DateTime<Tz>, duration: TimeDelta) -> Result<DateTime<Tz>> {
    dt.checked_sub_signed(duration)
        .ok_or_else(|| out_of_range(format!("{dt} - {duration}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
