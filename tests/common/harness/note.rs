//! Builder for seeded notes with fixed timestamps.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use jot::domain::{NewNote, Severity};

/// Builder for notes inserted straight into the database.
///
/// Seeding bypasses the CLI so tests control `CreatedAt` exactly.
#[derive(Debug, Clone)]
pub struct TestNote {
    label: String,
    content: String,
    created: DateTime<FixedOffset>,
    severity: Severity,
}

impl TestNote {
    /// Creates a low severity note labelled `default`, created 2024-01-01.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            label: "default".to_string(),
            content: content.into(),
            created: DateTime::parse_from_rfc3339("2024-01-01T09:00:00+00:00")
                .expect("valid timestamp"),
            severity: Severity::Low,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the creation time from an RFC 3339 string.
    pub fn created(mut self, rfc3339: &str) -> Self {
        self.created = DateTime::parse_from_rfc3339(rfc3339).expect("Invalid timestamp");
        self
    }

    /// Marks the note high severity.
    pub fn high(mut self) -> Self {
        self.severity = Severity::High;
        self
    }

    pub fn to_new_note(&self) -> NewNote {
        NewNote::new(
            self.label.clone(),
            self.content.clone(),
            self.created,
            self.severity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("hello").to_new_note();
        assert_eq!(note.label(), "default");
        assert_eq!(note.content(), "hello");
        assert_eq!(note.severity(), Severity::Low);
    }

    #[test]
    fn test_note_builder_sets_fields() {
        let note = TestNote::new("disk full")
            .label("ops")
            .created("2024-05-06T07:08:09+02:00")
            .high()
            .to_new_note();
        assert_eq!(note.label(), "ops");
        assert_eq!(note.severity(), Severity::High);
        assert_eq!(note.created_at().to_rfc3339(), "2024-05-06T07:08:09+02:00");
    }
}
