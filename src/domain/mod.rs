//! Core types: Note, Severity, TableName, OperationKind, ViewPreference

mod note;
mod operation;
mod table_name;

pub use note::{FALLBACK_LABEL, NO_LABEL_SENTINEL, NewNote, Note, Severity};
pub use operation::{ConflictingViewError, OperationKind, SortOrder, ViewPreference};
pub use table_name::{DEFAULT_TABLE_NAME, MAX_TABLE_NAME_LEN, ParseTableNameError, TableName};
