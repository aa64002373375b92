//! Error handling module for wmark

use std::fmt;

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Broad failure class, used to pick the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad command-line arguments or request values
    Usage,
    /// Environment problem: missing tool, unreadable or invalid config
    Configuration,
    /// The external tool ran and failed
    Processing,
}

impl ErrorCategory {
    /// Process exit code for this category
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCategory::Processing => 1,
            ErrorCategory::Usage => 2,
            ErrorCategory::Configuration => 3,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Usage => "usage error",
            ErrorCategory::Configuration => "configuration error",
            ErrorCategory::Processing => "processing error",
        };
        f.write_str(name)
    }
}

/// Main error type for wmark operations
#[derive(Error, Debug)]
pub enum WmarkError {
    /// External tool could not be located
    #[error("{program} is required but was not found. Install FFmpeg and ensure it is available in PATH")]
    ToolNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool exists but could not be started
    #[error("Failed to start {program}: {source}. Check that FFmpeg is installed and executable")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool ran and reported failure
    #[error("{program} failed to process the video ({status}). Check the input file and parameters for validity")]
    ToolFailed {
        program: String,
        exit_code: Option<i32>,
        status: String,
        /// Trailing lines of the tool's stderr
        stderr_tail: String,
    },

    /// I/O failure while supervising the running tool
    #[error("I/O error while running {program}: {source}")]
    ToolIo {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("Failed to load configuration from {path}: {message}")]
    ConfigLoad { path: String, message: String },

    /// Request or configuration failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl WmarkError {
    /// Failure class of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            WmarkError::ToolNotFound { .. }
            | WmarkError::ToolLaunch { .. }
            | WmarkError::ConfigLoad { .. } => ErrorCategory::Configuration,
            WmarkError::ToolFailed { .. } | WmarkError::ToolIo { .. } => ErrorCategory::Processing,
            WmarkError::Domain(DomainError::BadArgs(_)) => ErrorCategory::Usage,
            WmarkError::Domain(DomainError::InvalidConfig(_)) => ErrorCategory::Configuration,
        }
    }

    /// Exit code reported by the external tool, if it ran and exited normally
    pub fn tool_exit_code(&self) -> Option<i32> {
        match self {
            WmarkError::ToolFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Captured tool diagnostics, if any
    pub fn stderr_tail(&self) -> Option<&str> {
        match self {
            WmarkError::ToolFailed { stderr_tail, .. } if !stderr_tail.is_empty() => Some(stderr_tail),
            _ => None,
        }
    }
}

/// Result type alias for wmark operations
pub type WmarkResult<T> = std::result::Result<T, WmarkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_tool_not_found_is_configuration() {
        let err = WmarkError::ToolNotFound {
            program: "ffmpeg".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.category().exit_code(), 3);
        assert!(err.to_string().contains("Install FFmpeg"));
        assert!(err.source().is_some());
        assert_eq!(err.tool_exit_code(), None);
    }

    #[test]
    fn test_tool_failed_is_processing() {
        let err = WmarkError::ToolFailed {
            program: "ffmpeg".to_string(),
            exit_code: Some(1),
            status: "exit status: 1".to_string(),
            stderr_tail: "in.mp4: No such file or directory".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Processing);
        assert_eq!(err.category().exit_code(), 1);
        assert_eq!(err.tool_exit_code(), Some(1));
        assert_eq!(err.stderr_tail(), Some("in.mp4: No such file or directory"));
        assert!(err.to_string().contains("input file and parameters"));
    }

    #[test]
    fn test_domain_error_categories() {
        let usage: WmarkError = DomainError::BadArgs("x".to_string()).into();
        assert_eq!(usage.category(), ErrorCategory::Usage);
        assert_eq!(usage.category().exit_code(), 2);

        let config: WmarkError = DomainError::InvalidConfig("y".to_string()).into();
        assert_eq!(config.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let codes = [
            ErrorCategory::Usage.exit_code(),
            ErrorCategory::Configuration.exit_code(),
            ErrorCategory::Processing.exit_code(),
        ];
        assert!(codes.iter().all(|&c| c != 0));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
