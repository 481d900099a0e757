/// Timesheet handoff
///
/// The JSON document handed to whatever fills in the timesheet page. It
/// carries everything that side needs to address a cell (week and day
/// offset) and what to write into it (hours and comment).

use crate::error::Result;
use crate::model::date::to_naive;
use crate::model::DailyEntry;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;

/// One timesheet cell's worth of data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffEntry {
    pub date: String,
    pub hours: u32,
    pub tasks: Vec<String>,
    pub comment: String,
    /// Monday of the week containing `date`
    pub week_start: String,
    /// 0 = Monday ... 6 = Sunday
    pub day_offset: u32,
}

impl HandoffEntry {
    /// None if the entry's date isn't a real day
    pub fn from_entry(entry: &DailyEntry) -> Option<Self> {
        let day = to_naive(entry.date())?;
        let day_offset = day.weekday().num_days_from_monday();
        let week_start = day - Duration::days(i64::from(day_offset));

        Some(Self {
            date: entry.date().to_string(),
            hours: entry.hours(),
            tasks: entry.tasks().to_vec(),
            comment: entry.comment(),
            week_start: week_start.format("%Y-%m-%d").to_string(),
            day_offset,
        })
    }
}

/// Everything selected for one fill run
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetHandoff {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<HandoffEntry>,
}

impl TimesheetHandoff {
    pub fn new(entries: &[DailyEntry]) -> Self {
        Self::at(entries, Utc::now())
    }

    /// Build with an explicit timestamp
    pub fn at(entries: &[DailyEntry], generated_at: DateTime<Utc>) -> Self {
        let entries = entries
            .iter()
            .filter_map(|entry| {
                let converted = HandoffEntry::from_entry(entry);
                if converted.is_none() {
                    tracing::warn!(date = entry.date(), "dropping entry with invalid date");
                }
                converted
            })
            .collect();

        Self {
            generated_at,
            entries,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TicketPattern;
    use chrono::TimeZone;

    fn entry(date: &str) -> DailyEntry {
        let mut entry = DailyEntry::new(date);
        entry.set_primary(8, "MKIS-100: Add login", &TicketPattern::default());
        entry.push_subtask("validate fields");
        entry
    }

    #[test]
    fn test_week_addressing() {
        // 2025-07-03 is a Thursday
        let handoff = HandoffEntry::from_entry(&entry("2025-07-03")).unwrap();
        assert_eq!(handoff.week_start, "2025-06-30");
        assert_eq!(handoff.day_offset, 3);

        let sunday = HandoffEntry::from_entry(&entry("2025-07-06")).unwrap();
        assert_eq!(sunday.week_start, "2025-06-30");
        assert_eq!(sunday.day_offset, 6);
    }

    #[test]
    fn test_comment_and_tasks_carried() {
        let handoff = HandoffEntry::from_entry(&entry("2025-07-01")).unwrap();
        assert_eq!(handoff.tasks, vec!["MKIS-100"]);
        assert_eq!(handoff.comment, "MKIS-100: Add login\n  - validate fields");
        assert_eq!(handoff.hours, 8);
    }

    #[test]
    fn test_invalid_dates_dropped() {
        let generated_at = Utc.with_ymd_and_hms(2025, 7, 31, 12, 0, 0).unwrap();
        let handoff =
            TimesheetHandoff::at(&[entry("2025-07-01"), DailyEntry::new("not-a-date")], generated_at);
        assert_eq!(handoff.entries.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let generated_at = Utc.with_ymd_and_hms(2025, 7, 31, 12, 0, 0).unwrap();
        let json = TimesheetHandoff::at(&[entry("2025-07-01")], generated_at)
            .to_json()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["generated_at"], "2025-07-31T12:00:00Z");
        assert_eq!(value["entries"][0]["date"], "2025-07-01");
        assert_eq!(value["entries"][0]["day_offset"], 1);
        assert_eq!(value["entries"][0]["tasks"][0], "MKIS-100");
    }
}
