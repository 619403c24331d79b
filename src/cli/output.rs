//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, Severity};
use crate::store::{LabelCount, TableStats};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in `show` output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub row_id: i64,
    pub label: String,
    pub content: String,
    pub severity: Severity,
    pub created_at: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            row_id: note.row_id(),
            label: note.label().to_string(),
            content: note.content().to_string(),
            severity: note.severity(),
            created_at: note.created_at().to_rfc3339(),
        }
    }
}

/// Count for one (label, severity) pair.
#[derive(Debug, Serialize)]
pub struct LabelCountListing {
    pub label: String,
    pub severity: Severity,
    pub count: i64,
}

impl From<&LabelCount> for LabelCountListing {
    fn from(group: &LabelCount) -> Self {
        Self {
            label: group.label().to_string(),
            severity: group.severity(),
            count: group.count(),
        }
    }
}

/// Counts for one table in `stats` output.
#[derive(Debug, Serialize)]
pub struct TableStatsListing {
    pub table: String,
    pub total: i64,
    pub groups: Vec<LabelCountListing>,
}

impl From<&TableStats> for TableStatsListing {
    fn from(stats: &TableStats) -> Self {
        Self {
            table: stats.table().to_string(),
            total: stats.total(),
            groups: stats.groups().iter().map(LabelCountListing::from).collect(),
        }
    }
}

/// Full `stats` output.
#[derive(Debug, Serialize)]
pub struct StatsListing {
    pub total_tables: usize,
    pub tables: Vec<TableStatsListing>,
    pub unsupported_tables: Vec<String>,
}
