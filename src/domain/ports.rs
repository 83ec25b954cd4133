use chrono::{DateTime, NaiveDateTime, Utc};

/// Source of "now" for helpers that depend on the current instant.
pub trait Clock: Send + Sync {
    fn utc_now(&self) -> DateTime<Utc>;

    /// Wall-clock time in the local time zone, used for calendar-year math.
    fn local_now(&self) -> NaiveDateTime;
}
