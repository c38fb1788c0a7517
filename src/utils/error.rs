use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed vector line {line:?}: {reason}")]
    FormatError { line: String, reason: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::IoError(_) => ErrorCategory::Io,
            GenError::FormatError { .. } => ErrorCategory::Format,
            GenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Nothing here is retryable; an I/O failure leaves a partial file behind.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Format | ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::IoError(e) => format!("Could not write the output file: {}", e),
            GenError::FormatError { reason, .. } => {
                format!("Output file contains a malformed line: {}", reason)
            }
            GenError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the working directory is writable and has free space, then delete any partial output and run again"
            }
            ErrorCategory::Format => "Regenerate the file instead of editing it by hand",
            ErrorCategory::Configuration => "Check the command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
