//! Error types for remit

use thiserror::Error;

/// Main error type for remit
#[derive(Debug, Error)]
pub enum RemitError {
    #[error("Invalid {field}: {value} (must be 0-{max})")]
    InvalidDurationRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RemitError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RemitError::InvalidDate(_) => 3,
            RemitError::InvalidDurationRange { .. } | RemitError::InvalidDuration(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RemitError::InvalidDate(msg) => {
                format!(
                    "Invalid date: {}\n\n\
                    Accepted formats:\n\
                    • YYYY-MM-DD (e.g., 2024-01-31)\n\
                    • DD-MM-YYYY (e.g., 31-01-2024)",
                    msg
                )
            }
            RemitError::InvalidDurationRange { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Months must be 0-11; express 12 months as 1 year\n\
                    • Days must be 0-29; express 30 days as 1 month\n\
                    • Set strict_ranges = false in remit.toml to accept raw values",
                    self
                )
            }
            RemitError::InvalidDuration(input) => {
                format!(
                    "Invalid duration: '{}'\n\n\
                    Durations are written as years, months and days:\n\
                    • 2y 3m 10d\n\
                    • 18m\n\
                    • 40d\n\n\
                    Example:\n\
                    remit calc 2024-01-01 2y 3m 10d",
                    input
                )
            }
            RemitError::Config(msg) => {
                if msg.contains("policy") {
                    format!(
                        "{}\n\n\
                        Valid policies: return-lpd, add-day\n\
                        Example: REMIT_POLICY=add-day remit calc 2024-01-01 10d",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RemitError
pub type Result<T> = std::result::Result<T, RemitError>;
