use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtError {
    #[error("'{value}' cannot be converted as {target}")]
    FormatError { value: String, target: &'static str },

    #[error("Index {index} is out of range for a string of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("Value is absent: {operation} requires a value")]
    NullValueError { operation: &'static str },

    #[error("Cannot convert {from} to {to}: {message}")]
    ConversionError {
        from: &'static str,
        to: &'static str,
        message: String,
    },

    #[error("Date arithmetic out of range: {operation}")]
    OutOfRangeError { operation: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration file not found: {path}")]
    MissingConfigError { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ExtError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExtError::FormatError { .. }
            | ExtError::IndexOutOfRange { .. }
            | ExtError::NullValueError { .. }
            | ExtError::ConversionError { .. } => ErrorCategory::Input,
            ExtError::OutOfRangeError { .. } => ErrorCategory::Arithmetic,
            ExtError::MissingConfigError { .. }
            | ExtError::ConfigError { .. }
            | ExtError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ExtError::IoError(_) | ExtError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExtError::FormatError { value, target } => {
                format!("'{}' is not a valid {}", value, target)
            }
            ExtError::IndexOutOfRange { index, length } => {
                format!("Position {} does not exist in a text of {} characters", index, length)
            }
            ExtError::NullValueError { operation } => {
                format!("No value was given for {}", operation)
            }
            ExtError::ConversionError { to, .. } => format!("The value could not be read as {}", to),
            ExtError::OutOfRangeError { .. } => {
                "The resulting date is outside the supported calendar range".to_string()
            }
            ExtError::IoError(e) => format!("Could not access a file: {}", e),
            ExtError::SerializationError(e) => format!("Could not write the output: {}", e),
            ExtError::MissingConfigError { path } => {
                format!("The configuration file '{}' does not exist", path)
            }
            ExtError::ConfigError { message } => format!("Configuration problem: {}", message),
            ExtError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the input value and its expected format",
            ErrorCategory::Arithmetic => "Use a smaller offset or a date closer to the present",
            ErrorCategory::Configuration => "Review the configuration file and command line flags",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtError>;
