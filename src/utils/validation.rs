use crate::config::parse_instant;
use crate::utils::error::{ExtError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ExtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_instant(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    parse_instant(value).map_err(|e| ExtError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected an RFC 3339 or YYYY-MM-DDTHH:MM:SS timestamp ({})", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_instant() {
        assert!(validate_instant("clock.fixed_now", "2024-06-10T12:00:00Z").is_ok());
        assert!(validate_instant("clock.fixed_now", "2024-06-10T12:00:00").is_ok());
        assert!(validate_instant("clock.fixed_now", "yesterday").is_err());
        assert!(validate_instant("clock.fixed_now", "  ").is_err());
    }
}
