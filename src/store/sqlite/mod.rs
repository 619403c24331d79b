//! SQLite-backed note store.

mod connection;
mod repo_impl;


use rusqlite::Connection;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Wraps one connection to the notes database file, opened for the duration
/// of a single command.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
