// Reads a canonical (or hand-edited) report back into daily entries
//
// Single pass, one open entry at a time. Lines that fit no pattern are
// ignored, so users can leave notes in the report. Entries come out in
// the order their headers appear.

use crate::model::{is_calendar_date, DailyEntry, TicketPattern};
use regex::Regex;
use std::sync::LazyLock;

static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s*([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("date header pattern compiles")
});

static PRIMARY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([0-9]+)\]\s*(.+)").expect("primary line pattern compiles"));

static SUBTASK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*(.+)").expect("subtask line pattern compiles"));

pub struct ReportParser {
    pattern: TicketPattern,
}

impl ReportParser {
    pub fn new(pattern: TicketPattern) -> Self {
        Self { pattern }
    }

    /// Parse report text into entries, in appearance order
    pub fn parse(&self, text: &str) -> Vec<DailyEntry> {
        let mut entries = Vec::new();
        let mut current: Option<DailyEntry> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = DATE_HEADER.captures(line) {
                entries.extend(current.take());

                let date = &caps[1];
                if is_calendar_date(date) {
                    current = Some(DailyEntry::new(date));
                } else {
                    // Lines under a bad header must not leak into the previous day
                    tracing::trace!(line, "closing entry on invalid date header");
                }
                continue;
            }

            let Some(entry) = current.as_mut() else {
                tracing::trace!(line, "ignoring line outside any date block");
                continue;
            };

            if let Some(caps) = PRIMARY_LINE.captures(line) {
                match caps[1].parse::<u32>() {
                    Ok(hours) => entry.set_primary(hours, &caps[2], &self.pattern),
                    Err(_) => {
                        tracing::trace!(line, "ignoring primary line with unreadable hours");
                    }
                }
            } else if let Some(caps) = SUBTASK_LINE.captures(line) {
                entry.push_subtask(caps[1].trim());
            } else if let Some((ticket_id, rest)) = self.pattern.continuation(line) {
                entry.push_subtask(format!("{}: {}", ticket_id, rest.trim()));
            } else {
                tracing::trace!(line, "ignoring unrecognised report line");
            }
        }

        entries.extend(current);

        tracing::debug!(entries = entries.len(), "parsed report");
        entries
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new(TicketPattern::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<DailyEntry> {
        ReportParser::default().parse(text)
    }

    #[test]
    fn test_parse_single_entry() {
        let entries = parse("## 2025-07-03\n[5] MKIS-42: Fix bug\n  - add test");

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.date(), "2025-07-03");
        assert_eq!(entry.hours(), 5);
        assert_eq!(entry.tasks(), &["MKIS-42".to_string()]);
        assert_eq!(entry.description(), "MKIS-42: Fix bug");
        assert_eq!(entry.subtasks(), &["add test".to_string()]);
    }

    #[test]
    fn test_continuation_lines_fold_into_subtasks() {
        let entries = parse(
            "## 2025-07-01\n[8] MKIS-100: Add login\n  - validate fields\nMKIS-20 Search page\n  - debounce\n",
        );

        assert_eq!(
            entries[0].subtasks(),
            &[
                "validate fields".to_string(),
                "MKIS-20: Search page".to_string(),
                "debounce".to_string()
            ]
        );
        assert_eq!(entries[0].tasks(), &["MKIS-100".to_string()]);
    }

    #[test]
    fn test_last_primary_line_wins() {
        let entries = parse("## 2025-07-01\n[8] MKIS-1: a\n[4] MKIS-2 and MKIS-3: b");
        assert_eq!(entries[0].hours(), 4);
        assert_eq!(entries[0].description(), "MKIS-2 and MKIS-3: b");
        assert_eq!(
            entries[0].tasks(),
            &["MKIS-2".to_string(), "MKIS-3".to_string()]
        );
    }

    #[test]
    fn test_header_without_primary_line() {
        let entries = parse("##2025-07-01\n  - loose subtask\n  - loose subtask");
        assert_eq!(entries[0].hours(), 0);
        assert_eq!(entries[0].description(), "");
        // duplicates are kept on parse
        assert_eq!(entries[0].subtasks().len(), 2);
    }

    #[test]
    fn test_lines_before_first_header_ignored() {
        let entries = parse("[8] orphan\n- orphan\n## 2025-07-01\n[2] General work");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hours(), 2);
        assert!(entries[0].subtasks().is_empty());
    }

    #[test]
    fn test_unrecognised_lines_ignored() {
        let entries = parse("## 2025-07-01\n[8] General work\nbump deps\n# note to self\nmkis-5 lower");
        assert!(entries[0].subtasks().is_empty());
    }

    #[test]
    fn test_invalid_header_closes_entry() {
        let entries = parse(
            "## 2025-07-01\n[8] MKIS-1: a\n## 2025-02-30\n[3] MKIS-2: b\n  - stray\n## 2025-07-02\n[1] c",
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hours(), 8);
        assert!(entries[0].subtasks().is_empty());
        assert_eq!(entries[1].date(), "2025-07-02");
    }

    #[test]
    fn test_appearance_order_kept() {
        let entries = parse("## 2025-07-03\n[8] a\n\n## 2025-07-01\n[8] b\n");
        let dates: Vec<&str> = entries.iter().map(|e| e.date()).collect();
        assert_eq!(dates, vec!["2025-07-03", "2025-07-01"]);
    }

    #[test]
    fn test_unreadable_hours_ignored() {
        let entries = parse("## 2025-07-01\n[99999999999] MKIS-1: huge");
        assert_eq!(entries[0].hours(), 0);
        assert_eq!(entries[0].description(), "");
    }

    #[test]
    fn test_non_ascii_hours_ignored() {
        let entries = parse("## 2025-07-01\n[\u{0668}] MKIS-1: eight");
        assert_eq!(entries[0].hours(), 0);
        assert_eq!(entries[0].description(), "");
    }

    #[test]
    fn test_empty_report() {
        assert!(parse("").is_empty());
        assert!(parse("nothing to see\n[8] here").is_empty());
    }
}
