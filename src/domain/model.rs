use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Elapsed time bucketed into the coarsest unit that describes it.
///
/// Each variant carries the truncated magnitude in its own unit, so 95 seconds
/// is `Minutes(1)` and 20 days is `Weeks(2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "amount", rename_all = "snake_case")]
pub enum ElapsedTime {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

impl ElapsedTime {
    /// Negative deltas (values in the future) land in the seconds bucket.
    pub fn from_delta(delta: TimeDelta) -> Self {
        let seconds = delta.num_seconds();
        let days = delta.num_days();

        if seconds < SECONDS_PER_MINUTE {
            ElapsedTime::Seconds(seconds)
        } else if seconds < SECONDS_PER_HOUR {
            ElapsedTime::Minutes(delta.num_minutes())
        } else if seconds < SECONDS_PER_DAY {
            ElapsedTime::Hours(delta.num_hours())
        } else if days < DAYS_PER_WEEK {
            ElapsedTime::Days(days)
        } else if days < DAYS_PER_MONTH {
            ElapsedTime::Weeks(days / DAYS_PER_WEEK)
        } else if days < DAYS_PER_YEAR {
            ElapsedTime::Months(days / DAYS_PER_MONTH)
        } else {
            ElapsedTime::Years(days / DAYS_PER_YEAR)
        }
    }

    pub fn magnitude(&self) -> i64 {
        match *self {
            ElapsedTime::Seconds(n)
            | ElapsedTime::Minutes(n)
            | ElapsedTime::Hours(n)
            | ElapsedTime::Days(n)
            | ElapsedTime::Weeks(n)
            | ElapsedTime::Months(n)
            | ElapsedTime::Years(n) => n,
        }
    }

    fn phrases(&self) -> (&'static str, &'static str) {
        match self {
            ElapsedTime::Seconds(_) => ("one second ago", "seconds"),
            ElapsedTime::Minutes(_) => ("a minute ago", "minutes"),
            ElapsedTime::Hours(_) => ("an hour ago", "hours"),
            ElapsedTime::Days(_) => ("yesterday", "days"),
            ElapsedTime::Weeks(_) => ("a week ago", "weeks"),
            ElapsedTime::Months(_) => ("a month ago", "months"),
            ElapsedTime::Years(_) => ("a year ago", "years"),
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (singular, unit) = self.phrases();
        let amount = self.magnitude();
        if amount <= 1 {
            f.write_str(singular)
        } else {
            write!(f, "{} {} ago", amount, unit)
        }
    }
}
