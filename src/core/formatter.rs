/// Report formatter
///
/// Writes grouped commits (or parsed entries) as the canonical, editable
/// report text:
///
/// ```text
/// ## 2025-07-01
/// [8] MKIS-100: Add login
///   - validate fields
/// MKIS-101 Search page
///   - debounce input
/// bump deps
///
/// ```

use crate::model::{DailyEntry, DayGroup, TicketGroup, DEFAULT_HOURS, GENERAL_WORK};

/// Canonical report writer
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    default_hours: u32,
}

impl ReportFormatter {
    pub fn new(default_hours: u32) -> Self {
        Self { default_hours }
    }

    pub fn default_hours(&self) -> u32 {
        self.default_hours
    }

    /// Render grouped days, earliest date first
    ///
    /// The lexicographically smallest ticket gets the hours line, the rest
    /// follow as continuation lines. Commits without a ticket go last as
    /// plain lines, or become subtasks of "General work" on days without
    /// any ticket.
    pub fn format_days(&self, days: &[DayGroup]) -> String {
        let mut ordered: Vec<&DayGroup> = days.iter().collect();
        ordered.sort_by(|a, b| a.date.cmp(&b.date));

        let mut output = Vec::new();

        for day in ordered {
            output.push(format!("## {}", day.date));

            let tickets = day.tickets_in_render_order();
            match tickets.split_first() {
                Some((first, rest)) => {
                    let primary = format!(
                        "[{}] {}: {}",
                        self.default_hours, first.ticket_id, first.main_title
                    );
                    output.push(primary.trim_end().to_string());
                    push_subtasks(&mut output, first);

                    for ticket in rest {
                        // An untitled ticket line carries only the id and does not parse back
                        let line = format!("{} {}", ticket.ticket_id, ticket.main_title);
                        output.push(line.trim_end().to_string());
                        push_subtasks(&mut output, ticket);
                    }

                    output.extend(day.non_ticket_commits.iter().cloned());
                }
                None => {
                    output.push(format!("[{}] {}", self.default_hours, GENERAL_WORK));
                    output.extend(
                        day.non_ticket_commits
                            .iter()
                            .map(|commit| format!("  - {}", commit)),
                    );
                }
            }

            output.push(String::new());
        }

        output.join("\n")
    }

    /// Render parsed entries back to report text, in the order given
    ///
    /// Parsing the result gives back the same entries.
    pub fn format_entries(&self, entries: &[DailyEntry]) -> String {
        let mut output = Vec::new();

        for entry in entries {
            output.push(format!("## {}", entry.date()));
            if !entry.description().is_empty() {
                output.push(format!("[{}] {}", entry.hours(), entry.description()));
            }
            output.extend(entry.subtasks().iter().map(|s| format!("  - {}", s)));
            output.push(String::new());
        }

        output.join("\n")
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_HOURS)
    }
}

fn push_subtasks(output: &mut Vec<String>, ticket: &TicketGroup) {
    output.extend(ticket.subtasks.iter().map(|s| format!("  - {}", s)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, title: &str, subtasks: &[&str]) -> TicketGroup {
        TicketGroup {
            ticket_id: id.to_string(),
            main_title: title.to_string(),
            subtasks: subtasks.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_first_ticket_gets_hours() {
        let day = DayGroup {
            date: "2025-07-01".to_string(),
            tickets: vec![
                ticket("MKIS-20", "Search page", &["debounce input"]),
                ticket("MKIS-100", "Add login", &["validate fields", "fix redirect"]),
            ],
            non_ticket_commits: vec!["bump deps".to_string()],
        };

        let report = ReportFormatter::default().format_days(&[day]);
        assert_eq!(
            report,
            "## 2025-07-01\n\
             [8] MKIS-100: Add login\n  - validate fields\n  - fix redirect\n\
             MKIS-20 Search page\n  - debounce input\n\
             bump deps\n"
        );
    }

    #[test]
    fn test_untitled_tickets_have_no_trailing_space() {
        let day = DayGroup {
            date: "2025-07-01".to_string(),
            tickets: vec![
                ticket("MKIS-1", "", &["add badge"]),
                ticket("MKIS-2", "", &[]),
            ],
            non_ticket_commits: Vec::new(),
        };

        let report = ReportFormatter::default().format_days(&[day]);
        assert_eq!(report, "## 2025-07-01\n[8] MKIS-1:\n  - add badge\nMKIS-2\n");
        assert!(report.lines().all(|line| line == line.trim_end()));
    }

    #[test]
    fn test_general_work_day() {
        let day = DayGroup {
            date: "2025-07-02".to_string(),
            tickets: Vec::new(),
            non_ticket_commits: vec!["bump deps".to_string(), "fix ci".to_string()],
        };

        let report = ReportFormatter::default().format_days(&[day]);
        assert_eq!(
            report,
            "## 2025-07-02\n[8] General work\n  - bump deps\n  - fix ci\n"
        );
    }

    #[test]
    fn test_dates_ascending_with_blank_separator() {
        let days = vec![DayGroup::new("2025-07-03"), DayGroup::new("2025-07-01")];
        let report = ReportFormatter::default().format_days(&days);
        assert_eq!(
            report,
            "## 2025-07-01\n[8] General work\n\n## 2025-07-03\n[8] General work\n"
        );
    }

    #[test]
    fn test_configured_hours() {
        let report = ReportFormatter::new(6).format_days(&[DayGroup::new("2025-07-01")]);
        assert!(report.contains("[6] General work"));
    }

    #[test]
    fn test_no_days_is_empty() {
        assert_eq!(ReportFormatter::default().format_days(&[]), "");
        assert_eq!(ReportFormatter::default().format_entries(&[]), "");
    }

    #[test]
    fn test_format_entries() {
        let pattern = crate::model::TicketPattern::default();
        let mut worked = DailyEntry::new("2025-07-03");
        worked.set_primary(5, "MKIS-42: Fix bug", &pattern);
        worked.push_subtask("add test");
        let blank = DailyEntry::new("2025-07-01");

        let report = ReportFormatter::default().format_entries(&[worked, blank]);
        assert_eq!(
            report,
            "## 2025-07-03\n[5] MKIS-42: Fix bug\n  - add test\n\n## 2025-07-01\n"
        );
    }
}
