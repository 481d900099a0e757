// Decides whether a " - " fragment continues a ticket's feature name
//
// "MKIS-5 Checkout - Payment step - add retry" : "Payment step" reads like
// part of the feature name, "add retry" reads like something that was done.
// Anything starting with an action verb is work, anything else starting
// with a capital letter is a name.

/// Verbs that mark a fragment as a subtask. Matched as a case-insensitive
/// prefix, so "Updated" and "upd" both count.
pub const ACTION_VERBS: &[&str] = &[
    "add",
    "fix",
    "update",
    "remove",
    "delete",
    "place",
    "use",
    "enable",
    "disable",
    "migrate",
    "refactor",
    "cleanup",
    "rename",
    "show",
    "hide",
    "set",
    "implement",
    "improve",
    "revert",
    "replace",
    "move",
    "output",
    "call",
    "upd",
    "initial",
    "build",
];

/// Strategy for classifying the fragment right after the title
pub trait FragmentClassifier {
    /// True if `fragment` belongs to the title rather than being a subtask
    fn is_feature_name(&self, fragment: &str) -> bool;
}

/// Plain predicates work as classifiers too
impl<F> FragmentClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_feature_name(&self, fragment: &str) -> bool {
        self(fragment)
    }
}

/// Default classifier: capitalised and not led by an action verb
#[derive(Debug, Clone)]
pub struct ActionVerbClassifier {
    verbs: Vec<String>,
}

impl ActionVerbClassifier {
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let verbs = verbs
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();

        Self { verbs }
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    fn starts_with_verb(&self, fragment: &str) -> bool {
        let lowercase = fragment.to_lowercase();
        self.verbs.iter().any(|verb| lowercase.starts_with(verb.as_str()))
    }
}

impl Default for ActionVerbClassifier {
    fn default() -> Self {
        Self::new(ACTION_VERBS)
    }
}

impl FragmentClassifier for ActionVerbClassifier {
    fn is_feature_name(&self, fragment: &str) -> bool {
        let capitalised = fragment
            .chars()
            .next()
            .map(char::is_uppercase)
            .unwrap_or(false);

        capitalised && !self.starts_with_verb(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalised_name_is_feature() {
        let classifier = ActionVerbClassifier::default();
        assert!(classifier.is_feature_name("Payment step"));
        assert!(classifier.is_feature_name("Search Page"));
    }

    #[test]
    fn test_action_verbs_are_subtasks() {
        let classifier = ActionVerbClassifier::default();
        assert!(!classifier.is_feature_name("Add retry"));
        assert!(!classifier.is_feature_name("FIX redirect"));
        assert!(!classifier.is_feature_name("Updated copy"));
        assert!(!classifier.is_feature_name("Upd deps"));
    }

    #[test]
    fn test_prefix_match_is_mechanical() {
        // "User" starts with "use"
        let classifier = ActionVerbClassifier::default();
        assert!(!classifier.is_feature_name("User profile"));
    }

    #[test]
    fn test_first_character_as_written() {
        let classifier = ActionVerbClassifier::default();
        assert!(!classifier.is_feature_name(" Foo"));
        assert!(!classifier.is_feature_name("  Search Page"));
    }

    #[test]
    fn test_lowercase_is_subtask() {
        let classifier = ActionVerbClassifier::default();
        assert!(!classifier.is_feature_name("payment step"));
        assert!(!classifier.is_feature_name(""));
    }

    #[test]
    fn test_custom_vocabulary() {
        let classifier = ActionVerbClassifier::new(["Tweak", "  "]);
        assert_eq!(classifier.verbs(), &["tweak".to_string()]);
        assert!(!classifier.is_feature_name("Tweaked layout"));
        assert!(classifier.is_feature_name("Add button"));
    }

    #[test]
    fn test_closure_classifier() {
        let never = |_: &str| false;
        assert!(!never.is_feature_name("Payment step"));
    }
}
