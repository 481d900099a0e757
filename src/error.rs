/// Error types for gitlog-timesheet
///
/// The text compiler itself never fails on malformed input; these errors
/// cover configuration, git access and file handling around it.

use thiserror::Error;

/// Main error type for gitlog-timesheet operations
#[derive(Error, Debug)]
pub enum TimesheetError {
    /// I/O errors (reading logs, writing reports)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git-related errors
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file is not valid TOML for our schema
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ticket prefix can't be turned into a ticket id pattern
    #[error("Invalid ticket prefix: {0:?}")]
    InvalidTicketPrefix(String),

    /// A date bound that is not a real YYYY-MM-DD calendar day
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for gitlog-timesheet operations
pub type Result<T> = std::result::Result<T, TimesheetError>;

impl TimesheetError {
    /// Convert to a user-friendly message for the CLI
    pub fn user_message(&self) -> String {
        match self {
            TimesheetError::Io(e) => {
                format!("File system error. Check the path and permissions. Details: {}", e)
            }
            TimesheetError::Git(e) => {
                format!("Git operation failed. Is this a repository? Details: {}", e)
            }
            TimesheetError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            TimesheetError::ConfigParse(e) => {
                format!("Config file could not be read as TOML: {}", e)
            }
            TimesheetError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            TimesheetError::InvalidTicketPrefix(prefix) => {
                format!(
                    "Ticket prefix '{}' must start with a letter and contain only letters or digits",
                    prefix
                )
            }
            TimesheetError::InvalidDate(date) => {
                format!("'{}' is not a valid date, use YYYY-MM-DD", date)
            }
            TimesheetError::Generic(msg) => msg.clone(),
        }
    }
}
