/// Configuration for gitlog-timesheet
///
/// Sources, highest priority first:
/// CLI flags > environment variables > config file > defaults

use crate::core::{ReportFormatter, ReportParser};
use crate::error::{Result, TimesheetError};
use crate::grouping::{ActionVerbClassifier, TicketGrouper, ACTION_VERBS};
use crate::model::{TicketPattern, DEFAULT_HOURS, DEFAULT_TICKET_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides `ticket_prefix`
pub const ENV_TICKET_PREFIX: &str = "GITLOG_TIMESHEET_PREFIX";

/// Overrides `default_hours`
pub const ENV_DEFAULT_HOURS: &str = "GITLOG_TIMESHEET_HOURS";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project ticket prefix, e.g. "MKIS" for MKIS-869
    pub ticket_prefix: String,

    /// Hours written on each day's primary line
    pub default_hours: u32,

    /// Verbs that mark a commit fragment as a subtask
    pub action_verbs: Vec<String>,

    /// Repository reading options
    pub git: GitConfig,
}

/// Repository reading options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Only keep commits whose author name or email contains this
    pub author: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticket_prefix: DEFAULT_TICKET_PREFIX.to_string(),
            default_hours: DEFAULT_HOURS,
            action_verbs: ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
            git: GitConfig::default(),
        }
    }
}

impl Config {
    /// `<config dir>/gitlog-timesheet/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gitlog-timesheet").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TimesheetError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or the default location if it exists,
    /// then apply environment overrides
    ///
    /// An explicit path must exist. A missing default file just means
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::info!("Loading config from: {}", path.display());
                    Self::from_file(&path)?
                }
                None => {
                    tracing::info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// practice)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(ENV_TICKET_PREFIX).filter(|v| !v.trim().is_empty()) {
            self.ticket_prefix = prefix.trim().to_string();
        }

        if let Some(hours) = lookup(ENV_DEFAULT_HOURS).filter(|v| !v.trim().is_empty()) {
            self.default_hours = hours.trim().parse().map_err(|_| {
                TimesheetError::Config(format!(
                    "{} must be a whole number of hours, got '{}'",
                    ENV_DEFAULT_HOURS, hours
                ))
            })?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        TicketPattern::new(&self.ticket_prefix)?;

        if self.default_hours == 0 {
            return Err(TimesheetError::Config(
                "default_hours must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn ticket_pattern(&self) -> Result<TicketPattern> {
        TicketPattern::new(&self.ticket_prefix)
    }

    pub fn classifier(&self) -> ActionVerbClassifier {
        ActionVerbClassifier::new(&self.action_verbs)
    }

    pub fn grouper(&self) -> Result<TicketGrouper> {
        Ok(TicketGrouper::with_classifier(
            self.ticket_pattern()?,
            self.classifier(),
        ))
    }

    pub fn formatter(&self) -> ReportFormatter {
        ReportFormatter::new(self.default_hours)
    }

    pub fn parser(&self) -> Result<ReportParser> {
        Ok(ReportParser::new(self.ticket_pattern()?))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TimesheetError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }
}
