// Title bookkeeping for a single ticket.
//
// Fragments that were folded into a title must never come back as
// subtasks. `TitleParts` remembers them; it is a value, each insert hands
// back a new set.

use std::collections::BTreeSet;

/// Joins a title with its feature-name continuation
pub const FEATURE_SEPARATOR: &str = " - ";

/// Lowercased fragments already used in a ticket's title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleParts(BTreeSet<String>);

impl TitleParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this set with `part` added
    #[must_use]
    pub fn with(&self, part: &str) -> Self {
        let mut parts = self.0.clone();
        parts.insert(part.to_lowercase());
        Self(parts)
    }

    /// Case-insensitive membership
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(&fragment.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn title_len(title: &str) -> usize {
    title.chars().count()
}

/// Is `title` in "Title - Feature name" form
pub fn has_feature_name(title: &str) -> bool {
    title.contains(FEATURE_SEPARATOR)
}

/// Title choice for candidates that came from a " - " message.
///
/// Feature-name form wins over plain form; otherwise the longer one wins.
/// Equal length keeps the current title.
pub fn prefer_candidate(current: &str, candidate: &str) -> bool {
    if current.is_empty() {
        return true;
    }

    match (has_feature_name(current), has_feature_name(candidate)) {
        (false, true) => true,
        (true, false) => false,
        _ => title_len(candidate) > title_len(current),
    }
}

/// Title choice for a plain description: only replaces a missing or
/// shorter title, and never a feature-name title
pub fn prefer_plain(current: &str, candidate: &str) -> bool {
    if current.is_empty() {
        return true;
    }

    !has_feature_name(current) && title_len(current) < title_len(candidate)
}
