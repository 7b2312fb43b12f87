use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Path not found: {path}")]
    PathNotFoundError { path: String },

    #[error("Report error: {message}")]
    ReportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Report,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LintError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Missing paths always come from the CLI or the config file.
            LintError::ConfigValidationError { .. }
            | LintError::InvalidConfigValueError { .. }
            | LintError::PathNotFoundError { .. } => ErrorCategory::Configuration,
            LintError::IoError(_) => ErrorCategory::FileSystem,
            LintError::SerializationError(_)
            | LintError::CsvError(_)
            | LintError::ReportError { .. } => ErrorCategory::Report,
            LintError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::FileSystem | ErrorCategory::Report => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a run that failed with this error.
    /// Code 1 is reserved for "violations found".
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High | ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LintError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            LintError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            LintError::PathNotFoundError { path } => {
                format!("Cannot find '{}'", path)
            }
            LintError::IoError(e) => format!("File system error: {}", e),
            LintError::SerializationError(e) => format!("Could not build JSON report: {}", e),
            LintError::CsvError(e) => format!("Could not build CSV report: {}", e),
            LintError::ReportError { message } => format!("Could not write report: {}", message),
            LintError::PatternError(e) => format!("Internal pattern error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check naming-lint.toml and command-line flags against the documented options"
            }
            ErrorCategory::FileSystem => {
                "Make sure the path exists and is readable by the current user"
            }
            ErrorCategory::Report => "Check that the report output path is writable",
            ErrorCategory::Internal => "Please report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
