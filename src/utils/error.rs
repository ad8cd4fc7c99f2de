use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CuratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CuratorError::ApiError(_) => ErrorCategory::Network,
            CuratorError::CsvError(_)
            | CuratorError::SerializationError(_)
            | CuratorError::ProcessingError { .. } => ErrorCategory::Data,
            CuratorError::IoError(_) => ErrorCategory::Io,
            CuratorError::TomlParseError(_)
            | CuratorError::ConfigError { .. }
            | CuratorError::ValidationError { .. }
            | CuratorError::InvalidConfigValueError { .. }
            | CuratorError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CuratorError::ApiError(_) => ErrorSeverity::Medium,
            CuratorError::CsvError(_) | CuratorError::SerializationError(_) => ErrorSeverity::High,
            CuratorError::ProcessingError { .. } => ErrorSeverity::High,
            CuratorError::IoError(_) => ErrorSeverity::Critical,
            CuratorError::TomlParseError(_)
            | CuratorError::ConfigError { .. }
            | CuratorError::ValidationError { .. }
            | CuratorError::InvalidConfigValueError { .. }
            | CuratorError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CuratorError::ApiError(_) => {
                "Check network connectivity and the provider endpoints, then re-run".to_string()
            }
            CuratorError::CsvError(_) => {
                "Inspect the summary rows for values the CSV writer rejected".to_string()
            }
            CuratorError::IoError(_) => {
                "Check that the input file exists and the output path is writable".to_string()
            }
            CuratorError::SerializationError(_) => {
                "The provider payload did not match the expected shape; re-run with --verbose to capture it"
                    .to_string()
            }
            CuratorError::TomlParseError(_) => {
                "Fix the TOML syntax in the configuration file".to_string()
            }
            CuratorError::ConfigError { .. }
            | CuratorError::ValidationError { .. }
            | CuratorError::InvalidConfigValueError { .. }
            | CuratorError::MissingConfigError { .. } => {
                "Correct the configuration value and re-run".to_string()
            }
            CuratorError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the offending record".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CuratorError::ApiError(e) => format!("A provider request failed: {}", e),
            CuratorError::IoError(e) => format!("File access failed: {}", e),
            CuratorError::TomlParseError(e) => {
                format!("Configuration file is not valid TOML: {}", e)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CuratorError>;
