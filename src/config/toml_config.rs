use crate::config::{parse_instant, OutputFormat, Settings};
use crate::utils::error::{ExtError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    pub fixed_now: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingConfig {
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExtError::MissingConfigError {
                path: path.as_ref().display().to_string(),
            },
            _ => ExtError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExtError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIXED_NOW})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExtError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn fixed_now(&self) -> Option<&str> {
        self.clock.fixed_now.as_deref()
    }

    pub fn strict_parsing(&self) -> bool {
        self.parsing.strict.unwrap_or(false)
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.output.format.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    /// Validated settings with file values only.
    pub fn to_settings(&self) -> Result<Settings> {
        self.validate()?;

        Ok(Settings {
            now: self.fixed_now().map(parse_instant).transpose()?,
            strict: self.strict_parsing(),
            format: self.output_format(),
            verbose: self.verbose(),
            json_logs: self.json_logs(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(now) = self.fixed_now() {
            validation::validate_instant("clock.fixed_now", now)?;
        }

        if let Some(format) = self.output.format.as_deref() {
            validation::validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[clock]
fixed_now = "2024-06-10T12:00:00Z"

[parsing]
strict = true

[output]
format = "json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.to_settings().unwrap();

        assert_eq!(
            settings.now,
            Some(Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap())
        );
        assert!(settings.strict);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.verbose);
        assert!(!settings.json_logs);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let settings = config.to_settings().unwrap();

        assert_eq!(settings.now, None);
        assert!(!settings.strict);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("USEFUL_EXT_TEST_NOW", "2023-01-02T03:04:05Z");

        let toml_content = r#"
[clock]
fixed_now = "${USEFUL_EXT_TEST_NOW}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.fixed_now(), Some("2023-01-02T03:04:05Z"));

        std::env::remove_var("USEFUL_EXT_TEST_NOW");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            bad_format.validate(),
            Err(ExtError::InvalidConfigValueError { .. })
        ));

        let bad_clock = TomlConfig::from_toml_str("[clock]\nfixed_now = \"soon\"\n").unwrap();
        assert!(bad_clock.to_settings().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[output\nformat = ");
        assert!(matches!(result, Err(ExtError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[parsing]\nstrict = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.strict_parsing());
    }
}
