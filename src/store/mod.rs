//! SQLite note storage and query builders

mod query;
mod schema;
mod sqlite;

pub use query::{ClearTarget, NoteFilter, NoteQuery, Statement};
pub use schema::{create_note_table, table_exists, user_table_names};
pub use sqlite::SqliteStore;

use crate::domain::{NewNote, Note, OperationKind, Severity, TableName};
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// Errors
// ===========================================

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A show or clear targeted a table that has never been written to.
    #[error(
        "table {table} does not exist; make sure it exists before performing show or clear operations"
    )]
    TableNotFound { table: String },

    /// The database file has not been created yet.
    #[error("no notes database at {}; write a note first", .path.display())]
    NoDatabase { path: PathBuf },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// Stats Types
// ===========================================

/// Number of notes sharing a label and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    label: String,
    severity: Severity,
    count: i64,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, severity: Severity, count: i64) -> Self {
        Self {
            label: label.into(),
            severity,
            count,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

/// Row counts for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    table: TableName,
    total: i64,
    groups: Vec<LabelCount>,
}

impl TableStats {
    pub fn new(table: TableName, total: i64, groups: Vec<LabelCount>) -> Self {
        Self {
            table,
            total,
            groups,
        }
    }

    pub fn table(&self) -> &TableName {
        &self.table
    }

    /// Returns the total number of rows in the table.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Returns counts grouped by (label, severity), in engine order.
    pub fn groups(&self) -> &[LabelCount] {
        &self.groups
    }

    /// Returns the sum of all group counts.
    ///
    /// Always equal to `total()` for a consistent read.
    pub fn group_total(&self) -> i64 {
        self.groups.iter().map(LabelCount::count).sum()
    }
}

// ===========================================
// NoteRepository Trait
// ===========================================

/// Storage operations for jotted notes.
pub trait NoteRepository {
    /// Checks that `table` exists, creating it when `kind` allows.
    ///
    /// Returns `StoreError::TableNotFound` for show and clear against a
    /// missing table.
    fn ensure_table(&self, table: &TableName, kind: OperationKind) -> StoreResult<()>;

    /// Appends a note and returns its row id.
    fn insert_note(&mut self, table: &TableName, note: &NewNote) -> StoreResult<i64>;

    /// Returns the bounded selection for `query`, in the query's sort order.
    ///
    /// Any decode failure aborts the fetch.
    fn fetch_notes(&self, table: &TableName, query: &NoteQuery) -> StoreResult<Vec<Note>>;

    /// Deletes the targeted rows and returns how many were removed.
    ///
    /// Deleting a row id that does not exist removes nothing and succeeds.
    fn delete_notes(&mut self, table: &TableName, target: &ClearTarget) -> StoreResult<usize>;

    /// Lists user tables, excluding SQLite's internal ones.
    ///
    /// Tables whose names fall outside the allow-list are left out; see
    /// `unsupported_tables`.
    fn list_tables(&self) -> StoreResult<Vec<TableName>>;

    /// Lists user tables jot cannot address because of their names.
    fn unsupported_tables(&self) -> StoreResult<Vec<String>>;

    /// Returns row counts for a table.
    fn table_stats(&self, table: &TableName) -> StoreResult<TableStats>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_not_found_names_the_table() {
        let err = StoreError::TableNotFound {
            table: "ideas".to_string(),
        };
        assert!(err.to_string().contains("ideas"));
    }

    #[test]
    fn no_database_names_the_path() {
        let err = StoreError::NoDatabase {
            path: PathBuf::from("/tmp/jot/jot.db"),
        };
        assert!(err.to_string().contains("/tmp/jot/jot.db"));
    }

    #[test]
    fn group_total_sums_counts() {
        let stats = TableStats::new(
            TableName::new("jot").unwrap(),
            6,
            vec![
                LabelCount::new("work", Severity::Low, 2),
                LabelCount::new("work", Severity::High, 1),
                LabelCount::new("home", Severity::Low, 3),
            ],
        );
        assert_eq!(stats.group_total(), 6);
        assert_eq!(stats.group_total(), stats.total());
    }
}
