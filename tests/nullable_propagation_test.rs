use chrono::{NaiveDateTime, Utc};
use useful_extensions::prelude::*;
use useful_extensions::{lift, lift_map, lift_try, Clock, ExtError};

/// Fails the test if asked for the time.
struct PanickingClock;

impl Clock for PanickingClock {
    fn utc_now(&self) -> chrono::DateTime<Utc> {
        panic!("clock must not be read for absent values")
    }

    fn local_now(&self) -> NaiveDateTime {
        panic!("clock must not be read for absent values")
    }
}

#[test]
fn test_lift_never_evaluates_for_absent_input() {
    let predicate: bool = lift(None::<u8>, |_| -> bool { panic!("evaluated") });
    let transform: Option<String> = lift_map(None::<u8>, |_| -> String { panic!("evaluated") });
    let fallible: Result<Option<u8>, ExtError> =
        lift_try(None::<u8>, |_| -> Result<u8, ExtError> { panic!("evaluated") });

    assert!(!predicate);
    assert_eq!(transform, None);
    assert!(matches!(fallible, Ok(None)));
}

#[test]
fn test_absent_dates_skip_the_clock() {
    let absent: Option<NaiveDateTime> = None;
    assert_eq!(absent.to_readable_time_at(&PanickingClock), None);
    assert_eq!(absent.calculate_age_at(&PanickingClock), None);
}

#[test]
fn test_absent_dates_give_documented_results() {
    let absent: Option<NaiveDateTime> = None;

    assert!(!absent.is_work_day());
    assert!(!absent.is_weekend());
    assert!(!absent.is_between(None, None));
    assert_eq!(absent.to_readable_time(), None);
    assert_eq!(absent.calculate_age(), None);
    assert!(matches!(absent.next_workday(), Ok(None)));
    assert!(matches!(absent.next_weekend(), Ok(None)));
    assert!(matches!(absent.next_weekend_day(), Ok(None)));
    assert!(matches!(absent.add_days(1.0), Ok(None)));
    assert!(matches!(absent.add_hours(1.0), Ok(None)));
    assert!(matches!(absent.add_minutes(1.0), Ok(None)));
    assert!(matches!(absent.add_seconds(1.0), Ok(None)));
    assert!(matches!(absent.add_milliseconds(1.0), Ok(None)));
    assert!(matches!(absent.add_ticks(1), Ok(None)));
    assert!(matches!(absent.add_months(1), Ok(None)));
    assert!(matches!(absent.add_years(1), Ok(None)));
}

#[test]
fn test_absent_dates_skip_overflowing_arithmetic() {
    // the same call on a present value would overflow
    assert!(NaiveDateTime::MAX.add_years(1).is_err());
    assert!(matches!(None::<NaiveDateTime>.add_years(i32::MAX), Ok(None)));
}

#[test]
fn test_absent_ints_and_strings() {
    let number: Option<i32> = None;
    assert!(number.is_null());
    assert!(number.is_null_or_zero());
    assert!(!number.is_zero());
    assert!(!number.is_positive());
    assert!(!number.is_negative());
    assert!(!number.is_between(Some(0), Some(10)));

    let text: Option<&str> = None;
    assert!(text.is_null_or_empty());
    assert!(text.is_null_or_white_space());
    assert!(!text.has_number());
}
