//! Error types for isostudy
//!
//! Domain operations (countdown, process control, config) return
//! `IsoStudyError`. The binary glue wraps these in `anyhow` with context.

use thiserror::Error;

/// Main error type for isostudy operations
#[derive(Debug, Error)]
pub enum IsoStudyError {
    /// Countdown requested with zero total seconds
    #[error("Invalid duration: countdown must be longer than 00:00:00")]
    InvalidDuration,

    /// A duration field is outside its natural range
    #[error("Invalid duration: {field} must be between 0 and {max}, got {value}")]
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// Countdown was started twice
    #[error("Countdown has already been started")]
    AlreadyStarted,

    /// Listing running processes failed
    #[error("Process enumeration failed: {0}")]
    ProcessEnumeration(String),

    /// No running process matched a termination request
    #[error("No running process matches '{0}'")]
    NoMatchingProcess(String),

    /// Matching processes were found but none could be killed
    #[error("Failed to terminate '{0}' (permission denied or process exited)")]
    TerminationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for isostudy operations
pub type Result<T> = std::result::Result<T, IsoStudyError>;

/// Short message suitable for a modal dialog
pub fn user_message(error: &IsoStudyError) -> String {
    match error {
        IsoStudyError::InvalidDuration => "Please set a valid countdown time.".to_string(),
        IsoStudyError::FieldOutOfRange { field, max, .. } => {
            format!("The {field} field must be between 0 and {max}.")
        }
        IsoStudyError::AlreadyStarted => "A session is already running.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = IsoStudyError::FieldOutOfRange {
            field: "minutes",
            value: 75,
            max: 59,
        };
        assert_eq!(
            error.to_string(),
            "Invalid duration: minutes must be between 0 and 59, got 75"
        );
    }

    #[test]
    fn test_user_message_invalid_duration() {
        let message = user_message(&IsoStudyError::InvalidDuration);
        assert!(message.contains("valid countdown"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: IsoStudyError = io_error.into();
        assert!(matches!(error, IsoStudyError::Io(_)));
    }
}
