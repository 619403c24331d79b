//! Note types: a jotted note as stored, and one about to be written.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// Label used when neither the command line nor the config supplies one.
pub const FALLBACK_LABEL: &str = "default";

/// Label value that disables label filtering on show and clear.
pub const NO_LABEL_SENTINEL: &str = "no-label";

/// Binary priority of a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    High,
}

impl Severity {
    /// Maps the stored `HighSeverity` flag to a severity.
    pub fn from_high(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }

    /// Returns true for high severity notes.
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// Returns the display token (`low` or `high`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    label: String,
    content: String,
    created_at: DateTime<FixedOffset>,
    severity: Severity,
}

impl NewNote {
    /// Creates a note to be inserted.
    pub fn new(
        label: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<FixedOffset>,
        severity: Severity,
    ) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            created_at,
            severity,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// A stored note.
///
/// Notes are immutable once written. The only change a note can undergo is
/// deletion, so there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    row_id: i64,
    label: String,
    content: String,
    created_at: DateTime<FixedOffset>,
    severity: Severity,
}

impl Note {
    /// Creates a note as read back from a table.
    pub fn new(
        row_id: i64,
        label: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<FixedOffset>,
        severity: Severity,
    ) -> Self {
        Self {
            row_id,
            label: label.into(),
            content: content.into(),
            created_at,
            severity,
        }
    }

    /// Returns the row identifier assigned at insertion.
    pub fn row_id(&self) -> i64 {
        self.row_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
