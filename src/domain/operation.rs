//! Operation kinds and ordering preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of command being run.
///
/// Determines which configuration defaults apply and whether a missing
/// table may be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Write,
    Show,
    Clear,
}

impl OperationKind {
    /// Returns true if this operation may create a missing table.
    pub fn creates_tables(self) -> bool {
        matches!(self, Self::Write)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Show => "show",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the `CreatedAt` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which end of the timeline a count-bounded selection is taken from.
///
/// In config files `"default"` is accepted as a synonym for `recent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreference {
    Oldest,
    #[default]
    #[serde(alias = "default")]
    Recent,
}

/// Error returned when both `--oldest` and `--recent` are requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingViewError;

impl fmt::Display for ConflictingViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot use both --oldest and --recent; pass only one of them"
        )
    }
}

impl std::error::Error for ConflictingViewError {}

impl ViewPreference {
    /// Resolves the preference from command-line flags.
    ///
    /// Falls back to `default` when neither flag is set.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingViewError` when both flags are set.
    pub fn from_flags(
        oldest: bool,
        recent: bool,
        default: ViewPreference,
    ) -> Result<Self, ConflictingViewError> {
        match (oldest, recent) {
            (true, true) => Err(ConflictingViewError),
            (true, false) => Ok(Self::Oldest),
            (false, true) => Ok(Self::Recent),
            (false, false) => Ok(default),
        }
    }

    /// Returns the order used when bounding a selection by count.
    pub fn sort_order(self) -> SortOrder {
        match self {
            Self::Oldest => SortOrder::Ascending,
            Self::Recent => SortOrder::Descending,
        }
    }
}
