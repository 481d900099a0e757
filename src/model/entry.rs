/// Grouped and parsed work records
///
/// `TicketGroup` and `DayGroup` are what the grouper builds from raw
/// commits. `DailyEntry` is what the report parser produces and what the
/// timesheet side consumes.

use crate::model::TicketPattern;
use serde::Serialize;

/// Hours the formatter writes on every primary line
pub const DEFAULT_HOURS: u32 = 8;

/// Primary line text for days without any ticket work
pub const GENERAL_WORK: &str = "General work";

/// Everything one ticket got done on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketGroup {
    pub ticket_id: String,
    pub main_title: String,
    pub subtasks: Vec<String>,
}

impl TicketGroup {
    pub fn new(ticket_id: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            main_title: String::new(),
            subtasks: Vec::new(),
        }
    }
}

/// Grouping result for one date
///
/// `tickets` keeps first-seen order, which is the order commits were
/// collected in. Rendering uses `tickets_in_render_order` instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayGroup {
    pub date: String,
    pub tickets: Vec<TicketGroup>,
    pub non_ticket_commits: Vec<String>,
}

impl DayGroup {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn ticket(&self, ticket_id: &str) -> Option<&TicketGroup> {
        self.tickets.iter().find(|t| t.ticket_id == ticket_id)
    }

    /// Tickets sorted lexicographically by id
    pub fn tickets_in_render_order(&self) -> Vec<&TicketGroup> {
        let mut ordered: Vec<&TicketGroup> = self.tickets.iter().collect();
        ordered.sort_by(|a, b| a.ticket_id.cmp(&b.ticket_id));
        ordered
    }
}

/// One day of work as read from a report
///
/// `tasks` is always derived from `description`; there is no way to set
/// it on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    date: String,
    hours: u32,
    tasks: Vec<String>,
    description: String,
    subtasks: Vec<String>,
}

impl DailyEntry {
    /// Fresh entry as opened by a `## DATE` header
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hours: 0,
            tasks: Vec::new(),
            description: String::new(),
            subtasks: Vec::new(),
        }
    }

    /// Set the primary `[hours] description` line. Last call wins.
    pub fn set_primary(&mut self, hours: u32, description: &str, pattern: &TicketPattern) {
        self.hours = hours;
        self.description = description.to_string();
        self.tasks = pattern.find_all(description);
    }

    pub fn push_subtask(&mut self, subtask: impl Into<String>) {
        self.subtasks.push(subtask.into());
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    /// Description, or "General work" when the primary line was missing
    pub fn headline(&self) -> &str {
        if self.description.is_empty() {
            GENERAL_WORK
        } else {
            &self.description
        }
    }

    /// Comment text for the timesheet cell: headline then indented subtasks
    pub fn comment(&self) -> String {
        let mut lines = vec![self.headline().to_string()];
        lines.extend(self.subtasks.iter().map(|s| format!("  - {}", s)));
        lines.join("\n")
    }
}
