#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::clock::{FixedClock, SystemClock};
use crate::core::convert::parse_as;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after merging the config file and command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub now: Option<DateTime<Utc>>,
    pub strict: bool,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    /// A frozen clock when `now` is pinned, the system clock otherwise.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.now {
            Some(now) => Box::new(FixedClock::new(now)),
            None => Box::new(SystemClock),
        }
    }
}

/// Accepts RFC 3339 (`2024-06-10T12:00:00Z`), a naive timestamp
/// (`2024-06-10T12:00:00`, read as UTC) or a bare date (midnight UTC).
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    parse_as::<DateTime<Utc>>(value)
        .or_else(|_| parse_as::<NaiveDateTime>(value).map(|naive| naive.and_utc()))
        .or_else(|_| {
            parse_as::<NaiveDate>(value).map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}
