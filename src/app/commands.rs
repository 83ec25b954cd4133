use crate::config::cli::Command;
use crate::config::{parse_instant, OutputFormat, Settings};
use crate::core::datetime_ext::DateTimeExtensions;
use crate::core::int_ext::{IntExtensions, NullableIntExtensions};
use crate::core::string_ext::StringExtensions;
use crate::domain::model::ElapsedTime;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Report {
    ReadableTime {
        input: DateTime<Utc>,
        elapsed: ElapsedTime,
        phrase: String,
    },
    Calendar {
        input: DateTime<Utc>,
        is_work_day: bool,
        is_weekend: bool,
        next_workday: DateTime<Utc>,
        next_weekend: DateTime<Utc>,
        next_weekend_day: DateTime<Utc>,
    },
    Age {
        input: DateTime<Utc>,
        age: i32,
    },
    ToInt {
        input: String,
        value: i32,
    },
    Between {
        input: String,
        between: String,
    },
    Int {
        number: i64,
        is_zero: bool,
        is_positive: bool,
        is_negative: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_between: Option<bool>,
    },
    Strip {
        input: String,
        stripped: String,
        has_number: bool,
    },
}

pub fn run(command: &Command, settings: &Settings) -> Result<Report> {
    let clock = settings.clock();

    let report = match command {
        Command::ReadableTime { datetime } => {
            let input = parse_instant(datetime)?;
            let elapsed = input.elapsed_at(&*clock);
            Report::ReadableTime {
                input,
                elapsed,
                phrase: elapsed.to_string(),
            }
        }
        Command::Calendar { datetime } => {
            let input = parse_instant(datetime)?;
            Report::Calendar {
                input,
                is_work_day: input.is_work_day(),
                is_weekend: input.is_weekend(),
                next_workday: input.next_workday()?,
                next_weekend: input.next_weekend()?,
                next_weekend_day: input.next_weekend_day()?,
            }
        }
        Command::Age { datetime } => {
            let input = parse_instant(datetime)?;
            Report::Age {
                input,
                age: input.calculate_age_at(&*clock),
            }
        }
        Command::ToInt { text, .. } => Report::ToInt {
            input: text.clone(),
            value: text.to_int(settings.strict)?,
        },
        Command::Between { text, start, end } => Report::Between {
            input: text.clone(),
            between: text.get_between(start, end).to_string(),
        },
        Command::Int { number, low, high } => {
            let number = *number;
            let is_between = (low.is_some() || high.is_some())
                .then(|| Some(number).is_between(*low, *high));
            Report::Int {
                number,
                is_zero: IntExtensions::is_zero(number),
                is_positive: IntExtensions::is_positive(number),
                is_negative: IntExtensions::is_negative(number),
                is_between,
            }
        }
        Command::Strip { text } => Report::Strip {
            input: text.clone(),
            stripped: text.remove_diacritics(),
            has_number: text.has_number(),
        },
    };

    tracing::debug!("Command produced: {:?}", report);
    Ok(report)
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::ReadableTime { phrase, .. } => f.write_str(phrase),
            Report::Calendar {
                input,
                is_work_day,
                next_workday,
                next_weekend,
                next_weekend_day,
                ..
            } => {
                let kind = if *is_work_day { "workday" } else { "weekend" };
                writeln!(f, "{} is a {}", input.format("%Y-%m-%d (%A)"), kind)?;
                writeln!(f, "next workday:     {}", next_workday.format("%Y-%m-%d %H:%M:%S"))?;
                writeln!(f, "next weekend:     {}", next_weekend.format("%Y-%m-%d %H:%M:%S"))?;
                write!(f, "next weekend day: {}", next_weekend_day.format("%Y-%m-%d %H:%M:%S"))
            }
            Report::Age { age, .. } => write!(f, "{}", age),
            Report::ToInt { value, .. } => write!(f, "{}", value),
            Report::Between { between, .. } => f.write_str(between),
            Report::Int {
                is_zero,
                is_positive,
                is_negative,
                is_between,
                ..
            } => {
                write!(
                    f,
                    "zero: {}, positive: {}, negative: {}",
                    is_zero, is_positive, is_negative
                )?;
                if let Some(between) = is_between {
                    write!(f, ", between: {}", between)?;
                }
                Ok(())
            }
            Report::Strip { stripped, .. } => f.write_str(stripped),
        }
    }
}
