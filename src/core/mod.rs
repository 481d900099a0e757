/// Core compiler passes
///
/// Extraction, report formatting and parsing, date filtering, preview and
/// the handoff document. All of it is pure text in, data out.

pub mod extractor;
pub mod filter;
pub mod formatter;
pub mod handoff;
pub mod parser;
pub mod pipeline;
pub mod preview;

pub use extractor::{extract_commits, is_merge_commit, parse_commit_line};
pub use filter::DateRange;
pub use formatter::ReportFormatter;
pub use handoff::{HandoffEntry, TimesheetHandoff};
pub use parser::ReportParser;
pub use pipeline::{reformat, select_entries, Selection};
pub use preview::render_preview;
