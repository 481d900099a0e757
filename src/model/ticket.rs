/// Ticket identifiers
///
/// A ticket id is a fixed project prefix, a dash and digits (`MKIS-869`).
/// The prefix is configurable, so the regexes are compiled per prefix.

use crate::error::{Result, TimesheetError};
use regex::Regex;

/// Prefix used when nothing is configured
pub const DEFAULT_TICKET_PREFIX: &str = "MKIS";

/// Compiled matchers for one ticket prefix
#[derive(Debug, Clone)]
pub struct TicketPattern {
    prefix: String,
    leading: Regex,
    anywhere: Regex,
    continuation: Regex,
}

impl TicketPattern {
    /// Build the matchers for `prefix`
    ///
    /// The prefix must start with an ASCII letter and contain only ASCII
    /// letters and digits.
    pub fn new(prefix: &str) -> Result<Self> {
        let prefix = prefix.trim();
        let mut chars = prefix.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric());

        if !valid {
            return Err(TimesheetError::InvalidTicketPrefix(prefix.to_string()));
        }

        let id = format!(r"{}-[0-9]+", regex::escape(prefix));
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|_| TimesheetError::InvalidTicketPrefix(prefix.to_string()))
        };

        Ok(Self {
            prefix: prefix.to_string(),
            leading: compile(format!("^({})", id))?,
            anywhere: compile(id.clone())?,
            continuation: compile(format!(r"^({})\s+(.+)", id))?,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Ticket id at the very start of a commit message
    pub fn leading_id<'a>(&self, message: &'a str) -> Option<&'a str> {
        self.leading
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Every ticket id anywhere in `text`, in order of appearance
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.anywhere
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Split a `TICKET-1 rest` continuation line into id and rest
    pub fn continuation<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.continuation.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

impl Default for TicketPattern {
    fn default() -> Self {
        // The default prefix is a constant that passes validation.
        Self::new(DEFAULT_TICKET_PREFIX).expect("default ticket prefix is valid")
    }
}
