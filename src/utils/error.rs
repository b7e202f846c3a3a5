use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read input '{path}': {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::CsvError(_) | EtlError::InputReadError { .. } => ErrorCategory::Input,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Output,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
            ErrorCategory::Processing => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::CsvError(_) => {
                "Check that the input file has the header id,name,serial_number,cost,sales_price,sales_person"
            }
            EtlError::IoError(_) => "Check that the output path is writable",
            EtlError::InputReadError { .. } => "Check that the input file exists and is readable",
            EtlError::SerializationError(_) => "Report this as a bug; the report could not be serialized",
            EtlError::ConfigError { .. } | EtlError::ConfigValidationError { .. } => {
                "Check the configuration file syntax"
            }
            EtlError::InvalidConfigValueError { .. } => "Fix the offending configuration value",
            EtlError::MissingConfigError { .. } => "Add the missing configuration field",
            EtlError::ProcessingError { .. } => "Inspect the input records for malformed values",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Could not read sales records: {}", self),
            ErrorCategory::Output => format!("Could not write report: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
