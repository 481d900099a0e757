// Reads commit history straight out of a repository
//
// Produces the same `DATE: message` lines people otherwise paste from
// `git log --date=short --format="%ad: %s"`, oldest commit first so
// subtasks end up in the order the work happened.

use crate::error::{Result, TimesheetError};
use crate::model::CommitLine;
use chrono::{DateTime, FixedOffset};
use git2::{Repository, Sort};
use std::path::{Path, PathBuf};

/// What to pull out of the history
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    /// Substring of author name or email, case-insensitive
    pub author: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub since: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub until: Option<String>,
}

pub struct GitLogReader {
    repo: Repository,
    repo_path: PathBuf,
}

impl GitLogReader {
    /// Discover and open the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref())?;
        let repo_path = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();

        tracing::info!("Opened git repository at: {}", repo_path.display());

        Ok(Self { repo, repo_path })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Commits reachable from HEAD, oldest first
    pub fn commit_lines(&self, query: &LogQuery) -> Result<Vec<CommitLine>> {
        if self.repo.head().is_err() {
            return Err(TimesheetError::Generic(format!(
                "Repository at {} has no commits yet",
                self.repo_path.display()
            )));
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::REVERSE)?;
        revwalk.push_head()?;

        let author = query.author.as_ref().map(|a| a.to_lowercase());
        let mut lines = Vec::new();

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let signature = commit.author();

            if let Some(needle) = &author {
                let name = signature.name().unwrap_or("").to_lowercase();
                let email = signature.email().unwrap_or("").to_lowercase();
                if !name.contains(needle.as_str()) && !email.contains(needle.as_str()) {
                    continue;
                }
            }

            let Some(date) = local_date(&signature.when()) else {
                tracing::debug!(commit = %commit.id(), "skipping commit with unreadable time");
                continue;
            };

            if query.since.as_deref().is_some_and(|since| date.as_str() < since)
                || query.until.as_deref().is_some_and(|until| date.as_str() > until)
            {
                continue;
            }

            let summary = commit.summary().unwrap_or("").trim();
            if summary.is_empty() {
                continue;
            }

            lines.push(CommitLine::new(date, summary));
        }

        tracing::debug!(commits = lines.len(), "read commit history");
        Ok(lines)
    }

    /// History rendered as raw log text, one `DATE: message` per line
    pub fn log_text(&self, query: &LogQuery) -> Result<String> {
        let lines = self.commit_lines(query)?;
        Ok(lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Calendar date in the author's own timezone
fn local_date(time: &git2::Time) -> Option<String> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)?;
    let utc = DateTime::from_timestamp(time.seconds(), 0)?;
    Some(utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
}
