/// gitlog-timesheet library
///
/// Compiles `DATE: message` commit logs into a per-day, per-ticket
/// timesheet report and parses that report back into entries ready to
/// be filled in.

pub mod config;
pub mod core;
pub mod error;
pub mod grouping;
pub mod model;
pub mod source;

// Re-exports for convenience
pub use config::Config;
pub use error::{Result, TimesheetError};
pub use model::{CommitLine, DailyEntry, TicketGroup, TicketPattern};
