//! Validated SQL identifier naming a notes table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest table name accepted.
pub const MAX_TABLE_NAME_LEN: usize = 64;

/// Table used when neither the command line nor the config names one.
pub const DEFAULT_TABLE_NAME: &str = "jot";

/// Prefix SQLite reserves for its own tables.
const RESERVED_PREFIX: &str = "sqlite_";

/// The name of a notes table inside the database file.
///
/// Table names cannot be bound as statement parameters, so they are
/// interpolated into SQL text. A `TableName` is only constructible from
/// strings that pass the identifier allow-list, which makes interpolation safe.
///
/// # Validation Rules
/// - Non-empty after trimming, at most 64 characters
/// - First character is an ASCII letter or underscore
/// - Remaining characters are ASCII alphanumerics or underscores
/// - Must not start with the reserved `sqlite_` prefix (any case)
///
/// Case is preserved. SQLite itself resolves table names case-insensitively.
///
/// # Examples
///
/// ```
/// use jot::domain::TableName;
///
/// let table = TableName::new("work_notes").unwrap();
/// assert_eq!(table.as_str(), "work_notes");
/// assert_eq!(table.quoted(), "\"work_notes\"");
///
/// assert!(TableName::new("notes; DROP TABLE x").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

/// Error returned when parsing an invalid table name.
#[derive(Debug, Clone)]
pub struct ParseTableNameError(String);

impl fmt::Display for ParseTableNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTableNameError {}

impl TableName {
    /// Creates a new TableName from a string.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `ParseTableNameError` if the name is empty, too long, uses
    /// characters outside the allow-list, or collides with SQLite's reserved prefix.
    pub fn new(s: &str) -> Result<Self, ParseTableNameError> {
        let name = s.trim();

        if name.is_empty() {
            return Err(ParseTableNameError("table name cannot be empty".to_string()));
        }

        if name.len() > MAX_TABLE_NAME_LEN {
            return Err(ParseTableNameError(format!(
                "table name '{}' is longer than {} characters",
                name, MAX_TABLE_NAME_LEN
            )));
        }

        let mut chars = name.chars();
        let first_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ParseTableNameError(format!(
                "invalid table name '{}': use letters, digits and underscores, starting with a letter or underscore",
                name
            )));
        }

        if name.to_ascii_lowercase().starts_with(RESERVED_PREFIX) {
            return Err(ParseTableNameError(format!(
                "invalid table name '{}': the '{}' prefix is reserved",
                name, RESERVED_PREFIX
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the table name as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as a double-quoted SQL identifier.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Default for TableName {
    fn default() -> Self {
        Self(DEFAULT_TABLE_NAME.to_string())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableName(\"{}\")", self.0)
    }
}

impl FromStr for TableName {
    type Err = ParseTableNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TableName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TableName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["jot", "work_notes", "_scratch", "Notes2024"] {
            let table = TableName::new(name).unwrap();
            assert_eq!(table.as_str(), name);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let table = TableName::new("  jot  ").unwrap();
        assert_eq!(table.as_str(), "jot");
    }

    #[test]
    fn preserves_case() {
        let table = TableName::new("Ideas").unwrap();
        assert_eq!(table.to_string(), "Ideas");
    }

    #[test]
    fn rejects_empty() {
        assert!(TableName::new("").is_err());
        assert!(TableName::new("   ").is_err());
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(TableName::new("2024notes").is_err());
    }

    #[test]
    fn rejects_injection_attempts() {
        assert!(TableName::new("jot; DROP TABLE jot").is_err());
        assert!(TableName::new("jot\"--").is_err());
        assert!(TableName::new("jot notes").is_err());
        assert!(TableName::new("jot-notes").is_err());
    }

    #[test]
    fn rejects_reserved_prefix() {
        assert!(TableName::new("sqlite_master").is_err());
        assert!(TableName::new("SQLite_sequence").is_err());
        // Only the exact prefix is reserved
        assert!(TableName::new("sqlitenotes").is_ok());
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "a".repeat(MAX_TABLE_NAME_LEN + 1);
        assert!(TableName::new(&long).is_err());
        let max = "a".repeat(MAX_TABLE_NAME_LEN);
        assert!(TableName::new(&max).is_ok());
    }

    #[test]
    fn error_message_names_the_table() {
        let err = TableName::new("bad name").unwrap_err();
        assert!(err.to_string().contains("bad name"));
    }

    #[test]
    fn quoted_wraps_in_double_quotes() {
        let table = TableName::new("jot").unwrap();
        assert_eq!(table.quoted(), "\"jot\"");
    }

    #[test]
    fn default_is_valid() {
        let table = TableName::default();
        assert_eq!(TableName::new(table.as_str()).unwrap(), table);
    }

    #[test]
    fn from_str_parses() {
        let table: TableName = "daily".parse().unwrap();
        assert_eq!(table.as_str(), "daily");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<TableName, _> = serde_json::from_str("\"jot\"");
        assert!(ok.is_ok());
        let bad: Result<TableName, _> = serde_json::from_str("\"no way\"");
        assert!(bad.is_err());
    }
}
