use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;
use useful_extensions::app::commands::{self, Report};
use useful_extensions::config::OutputFormat;
use useful_extensions::{CliConfig, ExtError};

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_config_file_pins_clock_and_format() -> Result<()> {
    let file = write_config(
        r#"
[clock]
fixed_now = "2024-06-10T12:00:00Z"

[output]
format = "json"
"#,
    )?;
    let path = file.path().to_str().unwrap().to_string();

    let cli = CliConfig::try_parse_from(["useful-ext", "--config", &path, "age", "1990-06-10"])?;
    let settings = cli.resolve_settings()?;
    assert_eq!(settings.format, OutputFormat::Json);

    let report = commands::run(&cli.command, &settings)?;
    assert!(matches!(report, Report::Age { age: 34, .. }));

    let rendered = commands::render(&report, settings.format)?;
    let json: serde_json::Value = serde_json::from_str(&rendered)?;
    assert_eq!(json["command"], "age");
    assert_eq!(json["age"], 34);
    Ok(())
}

#[test]
fn test_command_line_overrides_config_file() -> Result<()> {
    let file = write_config(
        r#"
[clock]
fixed_now = "2024-06-10T12:00:00Z"

[output]
format = "json"
"#,
    )?;
    let path = file.path().to_str().unwrap().to_string();

    let cli = CliConfig::try_parse_from([
        "useful-ext",
        "--config",
        &path,
        "--format",
        "text",
        "--now",
        "2024-06-10T13:00:00Z",
        "readable-time",
        "2024-06-10T12:00:00Z",
    ])?;
    let settings = cli.resolve_settings()?;
    let report = commands::run(&cli.command, &settings)?;

    assert_eq!(commands::render(&report, settings.format)?, "an hour ago");
    Ok(())
}

#[test]
fn test_missing_config_file_is_reported_by_path() -> Result<()> {
    let cli = CliConfig::try_parse_from([
        "useful-ext",
        "--config",
        "/definitely/not/here.toml",
        "strip",
        "café",
    ])?;

    let err = cli.resolve_settings().unwrap_err();
    assert!(matches!(
        &err,
        ExtError::MissingConfigError { path } if path == "/definitely/not/here.toml"
    ));
    assert_eq!(
        err.severity(),
        useful_extensions::utils::error::ErrorSeverity::High
    );
    Ok(())
}

#[test]
fn test_strip_command_output() -> Result<()> {
    let cli = CliConfig::try_parse_from(["useful-ext", "strip", "Ångström 42"])?;
    let settings = cli.resolve_settings()?;
    let report = commands::run(&cli.command, &settings)?;

    assert_eq!(commands::render(&report, OutputFormat::Text)?, "Angstrom 42");
    assert!(matches!(report, Report::Strip { has_number: true, .. }));
    Ok(())
}
