//! Timezone resolution.
//!
//! Every value type in this crate accepts a "timezone-like" argument: either
//! an IANA identifier (`"America/New_York"`) or an already-resolved
//! [`Tz`] handle. [`resolve_timezone`] normalizes both into a [`Tz`]; the
//! offset rules of the handle are evaluated per instant by `chrono-tz`, so
//! zones with DST transitions yield the right offset for whatever point in
//! time they are applied to.

use chrono::{
    DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
};
use chrono_tz::Tz;

use crate::error::{Result, TemporalError};

/// A timezone argument before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimezoneLike {
    /// An IANA timezone identifier.
    Name(String),
    /// An already-resolved timezone handle.
    Zone(Tz),
}

impl From<&str> for TimezoneLike {
    fn from(name: &str) -> Self {
        TimezoneLike::Name(name.to_string())
    }
}

impl From<String> for TimezoneLike {
    fn from(name: String) -> Self {
        TimezoneLike::Name(name)
    }
}

impl From<&String> for TimezoneLike {
    fn from(name: &String) -> Self {
        TimezoneLike::Name(name.clone())
    }
}

impl From<Tz> for TimezoneLike {
    fn from(tz: Tz) -> Self {
        TimezoneLike::Zone(tz)
    }
}

impl From<&Tz> for TimezoneLike {
    fn from(tz: &Tz) -> Self {
        TimezoneLike::Zone(*tz)
    }
}

/// Resolve a timezone-like argument into a [`Tz`] handle.
///
/// # Errors
///
/// Returns [`TemporalError::InvalidArgument`] if the identifier is blank (the
/// argument names no timezone at all), or [`TemporalError::InvalidTimezone`]
/// if it is not a known IANA timezone.
///
/// # Examples
///
/// ```
/// use chrono_tz::Tz;
/// use tz_temporal::resolve_timezone;
///
/// assert_eq!(resolve_timezone("Asia/Tokyo").unwrap(), Tz::Asia__Tokyo);
/// assert_eq!(resolve_timezone(Tz::UTC).unwrap(), Tz::UTC);
/// assert!(resolve_timezone("Invalid/Zone").is_err());
/// ```
pub fn resolve_timezone(timezone: impl Into<TimezoneLike>) -> Result<Tz> {
    match timezone.into() {
        TimezoneLike::Zone(tz) => Ok(tz),
        TimezoneLike::Name(name) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(TemporalError::InvalidArgument(
                    "no timezone provided".to_string(),
                ));
            }
            let tz = trimmed
                .parse::<Tz>()
                .map_err(|_| TemporalError::InvalidTimezone(format!("'{}'", trimmed)))?;
            tracing::trace!(timezone = tz.name(), "resolved timezone");
            Ok(tz)
        }
    }
}

/// Attach `tz` to a naive wall-clock datetime.
///
/// Ambiguous local times (DST fall-back) take the earliest mapping. Local
/// times that do not exist (DST spring-forward gap) are read with the offset
/// in force a day earlier, i.e. before the transition, which lands them past
/// the gap on the same local day.
pub(crate) fn localize(tz: &Tz, naive: &NaiveDateTime) -> Result<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Ok(dt);
    }

    let before = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(*naive);
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc_naive = naive
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(|| out_of_range(format!("local time {naive} in {}", tz.name())))?;
    Ok(tz.from_utc_datetime(&utc_naive))
}

/// Midnight of `date` in `tz`.
pub(crate) fn start_of_day(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    localize(tz, &date.and_time(NaiveTime::MIN))
}

/// Shift a naive date by a signed number of whole days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| out_of_range(format!("{date} shifted by {days} days")))
}

/// The timezone abbreviation (e.g. "EST", "JST") in force at `dt`.
pub(crate) fn abbreviation(dt: &DateTime<Tz>) -> String {
    dt.format("%Z").to_string()
}

pub(crate) fn out_of_range(what: String) -> TemporalError {
    TemporalError::OutOfRange(what)
}

// ── Tests ───────────────────────────────────────────────────────────────────
