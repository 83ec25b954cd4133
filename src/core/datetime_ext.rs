use crate::adapters::clock::SystemClock;
use crate::core::nullable::{lift, lift_map, lift_try};
use crate::domain::model::ElapsedTime;
use crate::domain::ports::Clock;
use crate::utils::error::{ExtError, Result};
use chrono::{DateTime, Datelike, Days, Months, NaiveDateTime, TimeDelta, Utc, Weekday};
use std::fmt::Display;

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = MILLIS_PER_SECOND * 60.0;
const MILLIS_PER_HOUR: f64 = MILLIS_PER_MINUTE * 60.0;
const MILLIS_PER_DAY: f64 = MILLIS_PER_HOUR * 24.0;
const NANOS_PER_TICK: i64 = 100;

/// Calendar and relative-time helpers for date/time values.
///
/// Implementors only say how they map to and from a naive UTC timestamp;
/// everything else is shared. Naive values are read as UTC wall time.
pub trait DateTimeExtensions: Copy {
    fn as_utc_naive(self) -> NaiveDateTime;

    fn from_utc_naive(naive: NaiveDateTime) -> Self;

    /// Inclusive on both ends.
    fn is_between(self, start: Self, end: Self) -> bool {
        let value = self.as_utc_naive();
        start.as_utc_naive() <= value && value <= end.as_utc_naive()
    }

    fn to_readable_time(self) -> String {
        self.to_readable_time_at(&SystemClock)
    }

    /// Human phrase for the time elapsed since this value, e.g. "3 hours ago".
    fn to_readable_time_at<C: Clock + ?Sized>(self, clock: &C) -> String {
        self.elapsed_at(clock).to_string()
    }

    fn elapsed_at<C: Clock + ?Sized>(self, clock: &C) -> ElapsedTime {
        ElapsedTime::from_delta(clock.utc_now().naive_utc() - self.as_utc_naive())
    }

    fn is_work_day(self) -> bool {
        !self.is_weekend()
    }

    fn is_weekend(self) -> bool {
        matches!(self.as_utc_naive().weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// First workday strictly after this value, at the same time of day.
    fn next_workday(self) -> Result<Self> {
        advance_until(self, "next_workday", Self::is_work_day)
    }

    /// A Saturday moves to the following Saturday. Any other day moves to
    /// the next *workday*, exactly like [`next_workday`](Self::next_workday).
    ///
    /// Use [`next_weekend_day`](Self::next_weekend_day) to find the next
    /// Saturday or Sunday.
    fn next_weekend(self) -> Result<Self> {
        if self.as_utc_naive().weekday() == Weekday::Sat {
            return add_whole_days(self, 7, "next_weekend");
        }
        advance_until(self, "next_weekend", Self::is_work_day)
    }

    /// First Saturday or Sunday strictly after this value.
    fn next_weekend_day(self) -> Result<Self> {
        advance_until(self, "next_weekend_day", Self::is_weekend)
    }

    fn calculate_age(self) -> i32 {
        self.calculate_age_at(&SystemClock)
    }

    /// Difference in calendar years; ignores whether the anniversary has passed.
    fn calculate_age_at<C: Clock + ?Sized>(self, clock: &C) -> i32 {
        clock.local_now().year() - self.as_utc_naive().year()
    }

    fn add_days(self, value: f64) -> Result<Self> {
        add_scaled(self, value, MILLIS_PER_DAY, "add_days")
    }

    fn add_hours(self, value: f64) -> Result<Self> {
        add_scaled(self, value, MILLIS_PER_HOUR, "add_hours")
    }

    fn add_minutes(self, value: f64) -> Result<Self> {
        add_scaled(self, value, MILLIS_PER_MINUTE, "add_minutes")
    }

    fn add_seconds(self, value: f64) -> Result<Self> {
        add_scaled(self, value, MILLIS_PER_SECOND, "add_seconds")
    }

    fn add_milliseconds(self, value: f64) -> Result<Self> {
        add_scaled(self, value, 1.0, "add_milliseconds")
    }

    /// Adds `value` ticks of 100 nanoseconds.
    fn add_ticks(self, value: i64) -> Result<Self> {
        value
            .checked_mul(NANOS_PER_TICK)
            .map(TimeDelta::nanoseconds)
            .and_then(|delta| self.as_utc_naive().checked_add_signed(delta))
            .map(Self::from_utc_naive)
            .ok_or_else(|| out_of_range("add_ticks", value))
    }

    /// Month arithmetic clamps to the last day of a shorter month.
    fn add_months(self, value: i32) -> Result<Self> {
        let naive = self.as_utc_naive();
        let months = Months::new(value.unsigned_abs());
        let shifted = if value >= 0 {
            naive.checked_add_months(months)
        } else {
            naive.checked_sub_months(months)
        };

        shifted
            .map(Self::from_utc_naive)
            .ok_or_else(|| out_of_range("add_months", value))
    }

    fn add_years(self, value: i32) -> Result<Self> {
        value
            .checked_mul(12)
            .and_then(|months| self.add_months(months).ok())
            .ok_or_else(|| out_of_range("add_years", value))
    }
}

impl DateTimeExtensions for NaiveDateTime {
    fn as_utc_naive(self) -> NaiveDateTime {
        self
    }

    fn from_utc_naive(naive: NaiveDateTime) -> Self {
        naive
    }
}

impl DateTimeExtensions for DateTime<Utc> {
    fn as_utc_naive(self) -> NaiveDateTime {
        self.naive_utc()
    }

    fn from_utc_naive(naive: NaiveDateTime) -> Self {
        naive.and_utc()
    }
}

/// The date/time helpers over `Option`.
///
/// `None` gives `false` for predicates, `None` for transforms and `Ok(None)`
/// for fallible arithmetic, without running the wrapped helper.
pub trait NullableDateTimeExtensions {
    type Value: DateTimeExtensions;

    /// `false` when the value or either bound is absent.
    fn is_between(&self, start: Option<Self::Value>, end: Option<Self::Value>) -> bool;

    fn to_readable_time(&self) -> Option<String>;

    fn to_readable_time_at<C: Clock + ?Sized>(&self, clock: &C) -> Option<String>;

    fn is_work_day(&self) -> bool;

    fn is_weekend(&self) -> bool;

    fn next_workday(&self) -> Result<Option<Self::Value>>;

    fn next_weekend(&self) -> Result<Option<Self::Value>>;

    fn next_weekend_day(&self) -> Result<Option<Self::Value>>;

    fn calculate_age(&self) -> Option<i32>;

    fn calculate_age_at<C: Clock + ?Sized>(&self, clock: &C) -> Option<i32>;

    fn add_days(&self, value: f64) -> Result<Option<Self::Value>>;

    fn add_hours(&self, value: f64) -> Result<Option<Self::Value>>;

    fn add_minutes(&self, value: f64) -> Result<Option<Self::Value>>;

    fn add_seconds(&self, value: f64) -> Result<Option<Self::Value>>;

    fn add_milliseconds(&self, value: f64) -> Result<Option<Self::Value>>;

    fn add_ticks(&self, value: i64) -> Result<Option<Self::Value>>;

    fn add_months(&self, value: i32) -> Result<Option<Self::Value>>;

    fn add_years(&self, value: i32) -> Result<Option<Self::Value>>;
}

impl<T: DateTimeExtensions> NullableDateTimeExtensions for Option<T> {
    type Value = T;

    fn is_between(&self, start: Option<T>, end: Option<T>) -> bool {
        lift(self.zip(start).zip(end), |((value, start), end)| {
            value.is_between(start, end)
        })
    }

    fn to_readable_time(&self) -> Option<String> {
        lift_map(*self, T::to_readable_time)
    }

    fn to_readable_time_at<C: Clock + ?Sized>(&self, clock: &C) -> Option<String> {
        lift_map(*self, |value| value.to_readable_time_at(clock))
    }

    fn is_work_day(&self) -> bool {
        lift(*self, T::is_work_day)
    }

    fn is_weekend(&self) -> bool {
        lift(*self, T::is_weekend)
    }

    fn next_workday(&self) -> Result<Option<T>> {
        lift_try(*self, T::next_workday)
    }

    fn next_weekend(&self) -> Result<Option<T>> {
        lift_try(*self, T::next_weekend)
    }

    fn next_weekend_day(&self) -> Result<Option<T>> {
        lift_try(*self, T::next_weekend_day)
    }

    fn calculate_age(&self) -> Option<i32> {
        lift_map(*self, T::calculate_age)
    }

    fn calculate_age_at<C: Clock + ?Sized>(&self, clock: &C) -> Option<i32> {
        lift_map(*self, |value| value.calculate_age_at(clock))
    }

    fn add_days(&self, value: f64) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_days(value))
    }

    fn add_hours(&self, value: f64) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_hours(value))
    }

    fn add_minutes(&self, value: f64) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_minutes(value))
    }

    fn add_seconds(&self, value: f64) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_seconds(value))
    }

    fn add_milliseconds(&self, value: f64) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_milliseconds(value))
    }

    fn add_ticks(&self, value: i64) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_ticks(value))
    }

    fn add_months(&self, value: i32) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_months(value))
    }

    fn add_years(&self, value: i32) -> Result<Option<T>> {
        lift_try(*self, |dt| dt.add_years(value))
    }
}

fn out_of_range(operation: &str, value: impl Display) -> ExtError {
    ExtError::OutOfRangeError {
        operation: format!("{}({})", operation, value),
    }
}

/// Rounds `amount` units to the nearest millisecond and adds it.
fn add_scaled<D: DateTimeExtensions>(
    value: D,
    amount: f64,
    millis_per_unit: f64,
    operation: &str,
) -> Result<D> {
    let millis = (amount * millis_per_unit).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(out_of_range(operation, amount));
    }

    TimeDelta::try_milliseconds(millis as i64)
        .and_then(|delta| value.as_utc_naive().checked_add_signed(delta))
        .map(D::from_utc_naive)
        .ok_or_else(|| out_of_range(operation, amount))
}

fn add_whole_days<D: DateTimeExtensions>(value: D, days: u64, operation: &str) -> Result<D> {
    value
        .as_utc_naive()
        .checked_add_days(Days::new(days))
        .map(D::from_utc_naive)
        .ok_or_else(|| out_of_range(operation, format!("+{} days", days)))
}

/// Steps forward a day at a time, starting tomorrow, until `found` holds.
fn advance_until<D: DateTimeExtensions>(
    start: D,
    operation: &str,
    found: impl Fn(D) -> bool,
) -> Result<D> {
    let mut day = add_whole_days(start, 1, operation)?;
    while !found(day) {
        tracing::trace!("{}: skipping {}", operation, day.as_utc_naive().date());
        day = add_whole_days(day, 1, operation)?;
    }

    tracing::debug!(
        "{}: {} -> {}",
        operation,
        start.as_utc_naive(),
        day.as_utc_naive()
    );
    Ok(day)
}
