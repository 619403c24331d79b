//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{FALLBACK_LABEL, OperationKind, TableName, ViewPreference};

/// Note count used when a config section does not set one.
pub const DEFAULT_NOTE_COUNT: i64 = 10;

/// Defaults for one kind of operation.
///
/// `default_count` and `default_view` have no effect on writes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OperationDefaults {
    /// Table used when `--table` is not given
    pub default_table: TableName,

    /// Label used when `--label` is not given
    pub default_label: Option<String>,

    /// Number of notes shown or cleared when `--num-notes` is absent or 0
    pub default_count: i64,

    /// Which end of the timeline to take notes from
    pub default_view: ViewPreference,
}

impl Default for OperationDefaults {
    fn default() -> Self {
        Self {
            default_table: TableName::default(),
            default_label: None,
            default_count: DEFAULT_NOTE_COUNT,
            default_view: ViewPreference::default(),
        }
    }
}

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Notes database file
    pub database: Option<PathBuf>,

    pub write: OperationDefaults,
    pub show: OperationDefaults,
    pub clear: OperationDefaults,
}

impl Config {
    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// Unlike most settings files, this one is required: defaults for every
    /// operation come from it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            bail!(
                "config file not found: {} (create it to set default tables, labels and counts)",
                config_path.display()
            );
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the directory holding jot's config and database.
    ///
    /// Default: `~/.config/jot`
    pub fn jot_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("could not resolve the home directory")?;
        Ok(home.join(".config").join("jot"))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::jot_dir()?.join("config.toml"))
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `~/.config/jot/jot.db`
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> Result<PathBuf> {
        match cli_db.or(self.database.as_ref()) {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::jot_dir()?.join("jot.db")),
        }
    }

    /// Returns the defaults for an operation kind.
    pub fn defaults(&self, kind: OperationKind) -> &OperationDefaults {
        match kind {
            OperationKind::Write => &self.write,
            OperationKind::Show => &self.show,
            OperationKind::Clear => &self.clear,
        }
    }
}

impl OperationDefaults {
    /// Resolve the table, with an explicit non-empty name taking precedence.
    pub fn table(&self, requested: Option<&str>) -> Result<TableName> {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => TableName::new(name).with_context(|| "invalid --table"),
            None => Ok(self.default_table.clone()),
        }
    }

    /// Resolve the label filter for show or clear.
    ///
    /// An empty or absent label falls back to the configured default.
    /// `None` means no label restriction.
    pub fn filter_label(&self, requested: Option<&str>) -> Option<String> {
        non_empty(requested)
            .or_else(|| non_empty(self.default_label.as_deref()))
            .map(str::to_string)
    }

    /// Resolve the label for a new note.
    ///
    /// Falls back to the configured default, then to `default`; never empty.
    pub fn write_label(&self, requested: Option<&str>) -> String {
        non_empty(requested)
            .or_else(|| non_empty(self.default_label.as_deref()))
            .unwrap_or(FALLBACK_LABEL)
            .to_string()
    }

    /// Resolve the note count; absent or 0 falls back to the configured count.
    pub fn count(&self, requested: Option<i64>) -> i64 {
        match requested {
            Some(n) if n != 0 => n,
            _ => self.default_count,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
