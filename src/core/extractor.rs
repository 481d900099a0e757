// Pulls `DATE: message` lines out of a pasted git log
//
// Anything that doesn't look like a dated commit is skipped without a
// fuss. Merge commits are thrown away, but the date they were on still
// counts as a day with activity.

use crate::model::{is_calendar_date, CommitLine, DayCommits};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static COMMIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2}):\s*(.+)$").expect("commit line pattern compiles")
});

static MERGE_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Merge (branch|remote-tracking branch)").expect("merge pattern compiles")
});

/// Parse one log line. Merge commits are returned too, callers decide.
pub fn parse_commit_line(line: &str) -> Option<CommitLine> {
    let caps = COMMIT_LINE.captures(line)?;
    let date = caps.get(1)?.as_str();
    let message = caps.get(2)?.as_str().trim_end();

    if message.is_empty() || !is_calendar_date(date) {
        return None;
    }

    Some(CommitLine::new(date, message))
}

pub fn is_merge_commit(message: &str) -> bool {
    MERGE_COMMIT.is_match(message)
}

/// Bucket a whole log by date
///
/// Dates come out in the order they first appear, messages in the order
/// they were logged. Nothing is sorted here.
pub fn extract_commits(text: &str) -> Vec<DayCommits> {
    let mut days: Vec<DayCommits> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merges = 0usize;

    for line in text.lines() {
        let Some(commit) = parse_commit_line(line) else {
            if !line.trim().is_empty() {
                tracing::trace!(line, "skipping non-commit line");
            }
            continue;
        };

        let slot = *index.entry(commit.date.clone()).or_insert_with(|| {
            days.push(DayCommits::new(commit.date.clone()));
            days.len() - 1
        });

        if is_merge_commit(&commit.message) {
            merges += 1;
            continue;
        }

        days[slot].messages.push(commit.message);
    }

    tracing::debug!(dates = days.len(), merges, "extracted commit log");
    days
}
