/// Human-readable preview of parsed entries

use crate::model::DailyEntry;

/// `<date>: <hours>h - <description>` per entry, subtasks indented below,
/// entries separated by a blank line
pub fn render_preview(entries: &[DailyEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let mut lines = vec![format!(
                "{}: {}h - {}",
                entry.date(),
                entry.hours(),
                entry.headline()
            )];
            lines.extend(entry.subtasks().iter().map(|s| format!("  - {}", s)));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
