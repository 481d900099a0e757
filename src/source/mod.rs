/// Where raw commit logs come from
///
/// Pasted text needs no help. This module reads the same lines directly
/// from a git repository.

pub mod git_log;

pub use git_log::{GitLogReader, LogQuery};
