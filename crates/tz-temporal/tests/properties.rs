//! Property tests for the temporal contract.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use proptest::prelude::*;
use tz_temporal::{
    AbsoluteInstant, CalendarDate, ManualClock, RelativeCalendarDate, Temporal, TimeContext,
};

const ZONES: &[Tz] = &[
    Tz::UTC,
    Tz::America__New_York,
    Tz::America__Los_Angeles,
    Tz::America__Santiago,
    Tz::Europe__London,
    Tz::Europe__Berlin,
    Tz::Asia__Tokyo,
    Tz::Asia__Kolkata,
    Tz::Australia__Sydney,
    Tz::Pacific__Auckland,
    // Midnight DST starts, two of them east of UTC
    Tz::Africa__Cairo,
    Tz::Asia__Beirut,
    Tz::America__Havana,
];

fn zone() -> impl Strategy<Value = Tz> {
    prop::sample::select(ZONES)
}

/// Instants between 1950 and 2100.
fn utc_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-631_152_000i64..4_102_444_800i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

fn zoned_instant() -> impl Strategy<Value = AbsoluteInstant> {
    (utc_instant(), zone()).prop_map(|(utc, tz)| AbsoluteInstant::from_zoned(utc.with_timezone(&tz)))
}

fn naive_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..54_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(1960, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(days))
            .unwrap()
    })
}

fn context(now: DateTime<Utc>, tz: Tz) -> TimeContext {
    TimeContext::with_clock(Arc::new(ManualClock::new(now)), tz)
}

proptest! {
    #[test]
    fn to_timezone_preserves_instant(instant in zoned_instant(), tz in zone()) {
        let converted = instant.to_timezone(tz).unwrap();
        prop_assert_eq!(converted.to_instant().unwrap(), instant.to_instant().unwrap());
        prop_assert_eq!(converted.timezone(), tz);
    }

    #[test]
    fn calendar_date_round_trips_through_instant(date in naive_date(), tz in zone()) {
        let date = CalendarDate::from_naive_date(date, tz).unwrap();
        let back = date.to_absolute_instant().to_calendar_date().unwrap();
        prop_assert_eq!(back, date);
        prop_assert_eq!(back.to_naive_date(), date.to_naive_date());
    }

    #[test]
    fn calendar_date_keeps_naive_date(date in naive_date(), tz in zone()) {
        let calendar_date = CalendarDate::from_naive_date(date, tz).unwrap();
        prop_assert_eq!(calendar_date.to_naive_date(), date);
    }

    #[test]
    fn relative_date_round_trips_offset(
        now in utc_instant(),
        days in -5_000i64..5_000,
        tz in zone(),
    ) {
        let ctx = context(now, Tz::UTC);
        let relative = RelativeCalendarDate::new(days, Some(tz.into()), &ctx).unwrap();
        let again = RelativeCalendarDate::from_calendar_date(&relative.to_calendar_date().unwrap(), &ctx);
        prop_assert_eq!(again.days_since_today(), days);
        prop_assert_eq!(again.timezone(), tz);
    }

    #[test]
    fn relative_add_matches_calendar_shift(
        now in utc_instant(),
        days in -1_000i64..1_000,
        extra_hours in 0i64..24,
    ) {
        let ctx = context(now, Tz::UTC);
        let today = RelativeCalendarDate::today(&ctx);
        let shifted = today.add(TimeDelta::days(days) + TimeDelta::hours(extra_hours)).unwrap();
        let expected = today.to_naive_date().unwrap() + TimeDelta::days(days);
        prop_assert_eq!(shifted.to_naive_date().unwrap(), expected);
    }

    #[test]
    fn ordering_matches_instant_ordering(a in zoned_instant(), b in zoned_instant()) {
        let expected = a.as_datetime().cmp(b.as_datetime());
        prop_assert_eq!(a.compare(&b).unwrap(), expected);

        let holds = [a.less(&b).unwrap(), a.equals(&b).unwrap(), a.greater(&b).unwrap()];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        prop_assert_eq!(a.less_or_equal(&b).unwrap(), expected != Ordering::Greater);
        prop_assert_eq!(a.greater_or_equal(&b).unwrap(), expected != Ordering::Less);
        prop_assert_eq!(b.compare(&a).unwrap(), expected.reverse());
    }

    #[test]
    fn mixed_ordering_matches_instants(
        now in utc_instant(),
        days in -400i64..400,
        date in naive_date(),
        tz in zone(),
    ) {
        let ctx = context(now, tz);
        let relative = RelativeCalendarDate::new(days, None, &ctx).unwrap();
        let calendar_date = CalendarDate::from_naive_date(date, tz).unwrap();
        prop_assert_eq!(
            relative.compare(&calendar_date).unwrap(),
            relative.to_instant().unwrap().cmp(&calendar_date.to_instant().unwrap())
        );
    }

    #[test]
    fn millis_agree_with_seconds(secs in -2_000_000_000i64..4_000_000_000, tz in zone()) {
        let ctx = context(DateTime::from_timestamp(0, 0).unwrap(), Tz::UTC);
        let from_s = AbsoluteInstant::from_timestamp(Some(secs), None, Some(tz.into()), &ctx).unwrap();
        let from_ms = AbsoluteInstant::from_timestamp(None, Some(secs * 1000), Some(tz.into()), &ctx).unwrap();
        prop_assert_eq!(from_s, from_ms);
        prop_assert_eq!(from_s.timezone(), tz);
    }
}
