//! Notes table schema and catalog lookups.

use crate::domain::TableName;
use rusqlite::Connection;

/// Creates a notes table with the fixed schema.
///
/// Idempotent: an existing table is left untouched.
///
/// # Columns
/// - `row_id` - Auto-assigned primary key, never reused
/// - `Label` - Free-form label
/// - `Content` - Note text
/// - `CreatedAt` - Creation time, ISO 8601 text
/// - `HighSeverity` - 1 for high, 0 for low
pub fn create_note_table(conn: &Connection, table: &TableName) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {} (
            row_id INTEGER PRIMARY KEY AUTOINCREMENT,
            Label TEXT,
            Content TEXT,
            CreatedAt TIMESTAMP,
            HighSeverity BOOLEAN
        );",
        table.quoted()
    ))
}

/// Returns true if a table with this name exists.
///
/// The lookup is case-insensitive, as SQLite's own name resolution is.
pub fn table_exists(conn: &Connection, table: &TableName) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = ?1 COLLATE NOCASE
        )",
        [table.as_str()],
        |row| row.get(0),
    )
}

/// Returns the names of all user tables, skipping `sqlite_*` internals.
pub fn user_table_names(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}
