/// Data model for the commit-log compiler
///
/// Transient records (commit lines, ticket groups) live for one reformat
/// call. Daily entries are what gets handed on.

pub mod commit;
pub mod date;
pub mod entry;
pub mod ticket;

pub use commit::{CommitLine, DayCommits};
pub use date::{is_calendar_date, parse_date_bound};
pub use entry::{DailyEntry, DayGroup, TicketGroup, DEFAULT_HOURS, GENERAL_WORK};
pub use ticket::{TicketPattern, DEFAULT_TICKET_PREFIX};
