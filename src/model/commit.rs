/// Commit log records
///
/// A `CommitLine` is one `DATE: message` line that survived extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One dated commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLine {
    pub date: String,
    pub message: String,
}

impl CommitLine {
    pub fn new(date: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            message: message.into(),
        }
    }
}

/// Renders back to the `DATE: message` log form
impl fmt::Display for CommitLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.message)
    }
}

/// All messages logged on one date, in the order they appeared
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayCommits {
    pub date: String,
    pub messages: Vec<String>,
}

impl DayCommits {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_log_format() {
        let line = CommitLine::new("2025-07-01", "MKIS-100 Add login");
        assert_eq!(line.to_string(), "2025-07-01: MKIS-100 Add login");
    }
}
