/// Date range filtering
///
/// Both bounds are inclusive. ISO dates compare correctly as strings, so
/// no date parsing happens here.

use crate::model::DailyEntry;

/// Inclusive `[start, end]` window. Missing or empty bounds mean "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<String>,
    end: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::new(Some(start.into()), Some(end.into()))
    }

    /// Range that keeps every entry
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// A range is only applied when both bounds are present
    pub fn is_unbounded(&self) -> bool {
        let missing = |bound: &Option<String>| bound.as_deref().map_or(true, str::is_empty);
        missing(&self.start) || missing(&self.end)
    }

    pub fn contains(&self, date: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }

        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }

    /// New list with the entries inside the window; input is left alone
    pub fn filter(&self, entries: &[DailyEntry]) -> Vec<DailyEntry> {
        let kept: Vec<DailyEntry> = entries
            .iter()
            .filter(|entry| self.contains(entry.date()))
            .cloned()
            .collect();

        tracing::debug!(
            start = self.start(),
            end = self.end(),
            total = entries.len(),
            kept = kept.len(),
            "filtered entries by date"
        );
        kept
    }
}
