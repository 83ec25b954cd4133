use crate::config::toml_config::TomlConfig;
use crate::config::{parse_instant, OutputFormat, Settings};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "useful-ext")]
#[command(about = "String, integer and date/time helpers from the command line")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Pin "now" for relative-time and age output
    #[arg(long)]
    pub now: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Describe how long ago a date/time was
    ReadableTime { datetime: String },

    /// Workday/weekend facts about a date
    Calendar { datetime: String },

    /// Years between a date and today
    Age { datetime: String },

    /// Parse text as an integer
    ToInt {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Fail instead of returning 0
        #[arg(long)]
        strict: bool,
    },

    /// Text between two markers
    Between {
        text: String,
        start: String,
        end: String,
    },

    /// Sign and range checks for an integer
    Int {
        #[arg(allow_negative_numbers = true)]
        number: i64,
        #[arg(long, allow_negative_numbers = true)]
        low: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        high: Option<i64>,
    },

    /// Remove diacritics from text
    Strip { text: String },
}

impl CliConfig {
    /// Loads the config file, if any, then applies command line overrides.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.to_settings()?,
            None => Settings::default(),
        };

        // 應用命令列覆蓋設定
        if self.verbose {
            settings.verbose = true;
        }
        if let Some(now) = &self.now {
            settings.now = Some(parse_instant(now)?);
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Command::ToInt { strict: true, .. } = self.command {
            settings.strict = true;
        }

        Ok(settings)
    }
}
