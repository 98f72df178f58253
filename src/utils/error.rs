use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

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

    #[error("Unsupported file type: {file_name}")]
    UnsupportedFileType { file_name: String },

    #[error("File could not be read: {path} ({reason})")]
    UnreadableFile { path: String, reason: String },

    #[error("No file selected")]
    NoFileSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UploadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UploadError::ConfigError { .. }
            | UploadError::ConfigValidationError { .. }
            | UploadError::InvalidConfigValueError { .. }
            | UploadError::TomlError(_) => ErrorCategory::Configuration,
            UploadError::UnsupportedFileType { .. }
            | UploadError::UnreadableFile { .. }
            | UploadError::NoFileSelected => ErrorCategory::Input,
            UploadError::CsvError(_) | UploadError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            UploadError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UploadError::NoFileSelected => ErrorSeverity::Low,
            // 讀取失敗可重試
            UploadError::UnreadableFile { .. } => ErrorSeverity::Medium,
            UploadError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UploadError::UnsupportedFileType { .. } => "Choose a file with a .csv extension",
            UploadError::UnreadableFile { .. } => {
                "Check that the file exists and is readable, or use --on-read-error simulate"
            }
            UploadError::NoFileSelected => "Select a CSV file before processing",
            UploadError::TomlError(_)
            | UploadError::ConfigError { .. }
            | UploadError::ConfigValidationError { .. }
            | UploadError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
            UploadError::CsvError(_) => "Check that the header row is valid CSV",
            UploadError::SerializationError(_) => "Retry with --format text",
            UploadError::IoError(_) => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UploadError::UnsupportedFileType { .. } => "Please select a CSV file".to_string(),
            UploadError::UnreadableFile { path, .. } => {
                format!("The file '{}' could not be read", path)
            }
            UploadError::NoFileSelected => "No file has been selected yet".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;
