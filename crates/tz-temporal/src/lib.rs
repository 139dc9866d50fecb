//! # tz-temporal
//!
//! Timezone-aware temporal values that compare and combine with each other.
//!
//! Three value types share one contract, [`Temporal`]:
//!
//! - [`AbsoluteInstant`] — a point in time with a timezone attached
//! - [`CalendarDate`] — a calendar day in a timezone, held as its midnight
//! - [`RelativeCalendarDate`] — "N days from today" in a timezone, resolved
//!   against the clock on every read
//!
//! Any two values compare by reducing both sides to an instant, so
//! "tomorrow" can be checked against a stored deadline without the caller
//! tracking which side is a date, which is a datetime, or what timezone each
//! was built in.
//!
//! ## Modules
//!
//! - [`temporal`] — The shared contract and construction rules
//! - [`instant`] — [`AbsoluteInstant`]
//! - [`date`] — [`CalendarDate`]
//! - [`relative`] — [`RelativeCalendarDate`]
//! - [`timezone`] — Resolving identifiers and handles to timezones
//! - [`clock`] — Wall-clock sources ([`SystemClock`], [`ManualClock`])
//! - [`context`] — [`TimeContext`]: the clock plus the process default timezone
//! - [`config`] — [`Settings`], read from the environment
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use chrono_tz::Tz;
//! use tz_temporal::{CalendarDate, ManualClock, RelativeCalendarDate, Temporal, TimeContext};
//!
//! let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()));
//! let ctx = TimeContext::with_clock(clock.clone(), Tz::UTC);
//!
//! let tomorrow = RelativeCalendarDate::new(1, Some("UTC".into()), &ctx).unwrap();
//! assert_eq!(tomorrow.to_naive_date().unwrap(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
//!
//! clock.set(Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0).unwrap());
//! assert_eq!(tomorrow.to_naive_date().unwrap(), NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
//!
//! let deadline = CalendarDate::from_naive_date(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(), "UTC").unwrap();
//! assert!(tomorrow.equals(&deadline).unwrap());
//! ```

pub mod clock;
pub mod config;
pub mod context;
pub mod date;
pub mod error;
pub mod instant;
pub mod relative;
pub mod temporal;
pub mod timezone;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Settings;
pub use context::TimeContext;
pub use date::CalendarDate;
pub use error::TemporalError;
pub use instant::AbsoluteInstant;
pub use relative::RelativeCalendarDate;
pub use temporal::{Temporal, TemporalInput};
pub use timezone::{resolve_timezone, TimezoneLike};
