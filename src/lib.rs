pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{FixedClock, SystemClock};
#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::convert::{parse_as, ConvertTo};
pub use crate::core::nullable::{lift, lift_map, lift_try, Absent};
pub use crate::domain::{model::ElapsedTime, ports::Clock};
pub use crate::utils::error::{ExtError, Result};

/// Brings every extension trait into scope.
pub mod prelude {
    pub use crate::core::convert::ConvertTo;
    pub use crate::core::datetime_ext::{DateTimeExtensions, NullableDateTimeExtensions};
    pub use crate::core::int_ext::{IntExtensions, NullableIntExtensions};
    pub use crate::core::string_ext::{NullableStringExtensions, SplitOptions, StringExtensions};
}
