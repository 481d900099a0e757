// Buckets one day's commits by ticket and works out titles and subtasks
//
// Grouping is a reduction: messages are bucketed per ticket in the order
// they were logged, then each bucket is folded into a single TicketGroup.
// The fold carries the title-parts set along as a plain value.

use crate::grouping::classifier::{ActionVerbClassifier, FragmentClassifier};
use crate::grouping::title::{prefer_candidate, prefer_plain, TitleParts, FEATURE_SEPARATOR};
use crate::model::{DayCommits, DayGroup, TicketGroup, TicketPattern};

/// State threaded through the fold for one ticket
#[derive(Debug, Clone)]
struct TicketFold {
    group: TicketGroup,
    title_parts: TitleParts,
}

impl TicketFold {
    fn new(ticket_id: &str) -> Self {
        Self {
            group: TicketGroup::new(ticket_id),
            title_parts: TitleParts::new(),
        }
    }
}

pub struct TicketGrouper<C = ActionVerbClassifier> {
    pattern: TicketPattern,
    classifier: C,
}

impl TicketGrouper<ActionVerbClassifier> {
    /// Grouper with the default action-verb classifier
    pub fn new(pattern: TicketPattern) -> Self {
        Self::with_classifier(pattern, ActionVerbClassifier::default())
    }
}

impl<C: FragmentClassifier> TicketGrouper<C> {
    pub fn with_classifier(pattern: TicketPattern, classifier: C) -> Self {
        Self {
            pattern,
            classifier,
        }
    }

    /// Group every day, keeping the order of `days`
    pub fn group_days(&self, days: &[DayCommits]) -> Vec<DayGroup> {
        days.iter().map(|day| self.group_day(day)).collect()
    }

    /// Group the commits of a single date
    pub fn group_day(&self, day: &DayCommits) -> DayGroup {
        // (ticket id, descriptions) in first-seen order
        let mut buckets: Vec<(&str, Vec<&str>)> = Vec::new();
        let mut non_ticket_commits = Vec::new();

        for message in &day.messages {
            let Some(ticket_id) = self.pattern.leading_id(message) else {
                non_ticket_commits.push(message.clone());
                continue;
            };

            let description = strip_separators(&message[ticket_id.len()..]);
            match buckets.iter_mut().find(|(id, _)| *id == ticket_id) {
                Some((_, descriptions)) => descriptions.push(description),
                None => buckets.push((ticket_id, vec![description])),
            }
        }

        let tickets: Vec<TicketGroup> = buckets
            .into_iter()
            .map(|(ticket_id, descriptions)| {
                descriptions
                    .into_iter()
                    .fold(TicketFold::new(ticket_id), |fold, description| {
                        self.fold_description(fold, description)
                    })
                    .group
            })
            .collect();

        tracing::debug!(
            date = %day.date,
            tickets = tickets.len(),
            non_ticket = non_ticket_commits.len(),
            "grouped commits"
        );

        DayGroup {
            date: day.date.clone(),
            tickets,
            non_ticket_commits,
        }
    }

    /// One step of the per-ticket reduction
    fn fold_description(&self, fold: TicketFold, description: &str) -> TicketFold {
        let TicketFold {
            mut group,
            mut title_parts,
        } = fold;

        if !description.contains(FEATURE_SEPARATOR) {
            let candidate = description.trim();
            if prefer_plain(&group.main_title, candidate) {
                group.main_title = candidate.to_string();
            }
            return TicketFold { group, title_parts };
        }

        let parts: Vec<&str> = description.split(FEATURE_SEPARATOR).collect();
        let mut title = parts[0].trim().to_string();
        let mut first_subtask = 1;

        if let Some(next) = parts.get(1) {
            if self.classifier.is_feature_name(next) {
                let feature_name = next.trim();
                title = format!("{}{}{}", title, FEATURE_SEPARATOR, feature_name);
                title_parts = title_parts.with(feature_name);
                first_subtask = 2;
            }
        }

        if prefer_candidate(&group.main_title, &title) {
            group.main_title = title;
        }

        for part in parts.iter().skip(first_subtask) {
            let subtask = clean_subtask(part);
            if subtask.is_empty()
                || group.subtasks.iter().any(|s| s == subtask)
                || title_parts.contains(subtask)
            {
                continue;
            }
            group.subtasks.push(subtask.to_string());
        }

        TicketFold { group, title_parts }
    }
}

/// Drop the colon/dash/whitespace run between a ticket id and its text
fn strip_separators(rest: &str) -> &str {
    rest.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
}

fn clean_subtask(part: &str) -> &str {
    let trimmed = part.trim();
    trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end()
}
