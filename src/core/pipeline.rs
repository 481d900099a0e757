// End-to-end passes over the compiler stages.
//
// reformat:  raw log -> extract -> group -> canonical report
// select:    report  -> parse -> date filter -> Selection
//
// Empty results are not errors. Selection spells out which kind of
// "nothing" happened so callers can tell the user the right thing.

use crate::core::{extract_commits, DateRange, ReportFormatter, ReportParser};
use crate::grouping::{FragmentClassifier, TicketGrouper};
use crate::model::DailyEntry;

/// Raw `DATE: message` log to canonical report text
///
/// Returns an empty string when the log has no dated commits.
pub fn reformat<C: FragmentClassifier>(
    log: &str,
    grouper: &TicketGrouper<C>,
    formatter: &ReportFormatter,
) -> String {
    let days = extract_commits(log);
    let grouped = grouper.group_days(&days);
    formatter.format_days(&grouped)
}

/// Outcome of parsing a report and applying a date window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// At least one entry inside the window
    Entries(Vec<DailyEntry>),
    /// The report held no entries at all
    NothingParsed,
    /// Entries were parsed, none fell inside the window
    NothingInRange { parsed: usize },
}

impl Selection {
    /// Selected entries, empty for both "nothing" outcomes
    pub fn entries(&self) -> &[DailyEntry] {
        match self {
            Selection::Entries(entries) => entries.as_slice(),
            _ => &[],
        }
    }

    pub fn into_entries(self) -> Vec<DailyEntry> {
        match self {
            Selection::Entries(entries) => entries,
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !matches!(self, Selection::Entries(_))
    }

    /// Informational text for the empty outcomes
    pub fn notice(&self) -> Option<String> {
        match self {
            Selection::Entries(_) => None,
            Selection::NothingParsed => Some("No valid entries found in the report.".to_string()),
            Selection::NothingInRange { parsed } => Some(format!(
                "No entries found in the selected date range ({} parsed outside it).",
                parsed
            )),
        }
    }
}

/// Parse `report` and keep what falls inside `range`
pub fn select_entries(report: &str, parser: &ReportParser, range: &DateRange) -> Selection {
    let parsed = parser.parse(report);
    if parsed.is_empty() {
        return Selection::NothingParsed;
    }

    let kept = range.filter(&parsed);
    if kept.is_empty() {
        Selection::NothingInRange {
            parsed: parsed.len(),
        }
    } else {
        Selection::Entries(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TicketPattern;

    const REPORT: &str = "## 2025-07-01\n[8] MKIS-1: a\n\n## 2025-07-02\n[8] General work\n";

    #[test]
    fn test_reformat_pipeline() {
        let grouper = TicketGrouper::new(TicketPattern::default());
        let report = reformat(
            "2025-07-01: MKIS-1 Cart - add badge\n2025-07-01: chore",
            &grouper,
            &ReportFormatter::default(),
        );

        assert_eq!(report, "## 2025-07-01\n[8] MKIS-1: Cart\n  - add badge\nchore\n");
    }

    #[test]
    fn test_reformat_nothing() {
        let grouper = TicketGrouper::new(TicketPattern::default());
        assert_eq!(reformat("no dates here", &grouper, &ReportFormatter::default()), "");
    }

    #[test]
    fn test_select_entries() {
        let selection = select_entries(
            REPORT,
            &ReportParser::default(),
            &DateRange::between("2025-07-02", "2025-07-31"),
        );

        assert_eq!(selection.entries().len(), 1);
        assert!(selection.notice().is_none());
    }

    #[test]
    fn test_nothing_parsed_vs_out_of_range() {
        let parser = ReportParser::default();

        let empty = select_entries("just text", &parser, &DateRange::unbounded());
        assert_eq!(empty, Selection::NothingParsed);
        assert!(empty.is_empty());

        let out_of_range =
            select_entries(REPORT, &parser, &DateRange::between("2025-08-01", "2025-08-31"));
        assert_eq!(out_of_range, Selection::NothingInRange { parsed: 2 });
        assert!(out_of_range.entries().is_empty());
        assert!(out_of_range.notice().unwrap().contains("date range"));
    }
}
