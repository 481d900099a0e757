/// Grouping module
///
/// Heuristics that turn one day's commit messages into per-ticket titles
/// and subtasks.

pub mod classifier;
pub mod grouper;
pub mod title;

pub use classifier::{ActionVerbClassifier, FragmentClassifier, ACTION_VERBS};
pub use grouper::TicketGrouper;
pub use title::TitleParts;
