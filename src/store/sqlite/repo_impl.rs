//! NoteRepository trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{NewNote, Note, OperationKind, Severity, TableName};
use crate::store::{
    ClearTarget, LabelCount, NoteQuery, NoteRepository, Statement, StoreError, StoreResult,
    TableStats, create_note_table, table_exists, user_table_names,
};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use rusqlite::params_from_iter;

/// Space-separated `CreatedAt` layout found in older jot databases.
const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// Encodes a timestamp as sortable RFC 3339 text with microseconds.
///
/// The writer's local offset is kept and ordering compares this text, so
/// notes written across an offset change (a DST fall-back hour) can sort out
/// of wall-clock order.
pub(crate) fn encode_timestamp(ts: DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Decodes a stored `CreatedAt` value.
pub(crate) fn decode_timestamp(s: &str) -> StoreResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, LEGACY_TIMESTAMP_FORMAT))
        .map_err(|e| StoreError::InvalidData(format!("invalid CreatedAt '{}': {}", s, e)))
}

fn log_statement(stmt: &Statement) {
    tracing::debug!(sql = stmt.sql(), params = stmt.params().len(), "executing");
}

impl NoteRepository for SqliteStore {
    fn ensure_table(&self, table: &TableName, kind: OperationKind) -> StoreResult<()> {
        if table_exists(&self.conn, table)? {
            return Ok(());
        }

        if !kind.creates_tables() {
            return Err(StoreError::TableNotFound {
                table: table.to_string(),
            });
        }

        tracing::info!(table = %table, "creating notes table");
        create_note_table(&self.conn, table)?;
        Ok(())
    }

    fn insert_note(&mut self, table: &TableName, note: &NewNote) -> StoreResult<i64> {
        let sql = format!(
            "INSERT INTO {} (Label, Content, CreatedAt, HighSeverity) VALUES (?1, ?2, ?3, ?4)",
            table.quoted()
        );
        self.conn.execute(
            &sql,
            rusqlite::params![
                note.label(),
                note.content(),
                encode_timestamp(note.created_at()),
                note.severity().is_high(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn fetch_notes(&self, table: &TableName, query: &NoteQuery) -> StoreResult<Vec<Note>> {
        let stmt = query.select_statement(table);
        log_statement(&stmt);

        let mut prepared = self.conn.prepare(stmt.sql())?;
        let rows = prepared.query_map(params_from_iter(stmt.params()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, bool>(4)?,
            ))
        })?;

        let mut notes = Vec::new();
        for row in rows {
            let (row_id, label, content, created_str, high) = row?;
            let created_at = decode_timestamp(&created_str)?;
            notes.push(Note::new(
                row_id,
                label,
                content,
                created_at,
                Severity::from_high(high),
            ));
        }
        Ok(notes)
    }

    fn delete_notes(&mut self, table: &TableName, target: &ClearTarget) -> StoreResult<usize> {
        let stmt = target.delete_statement(table);
        log_statement(&stmt);
        let removed = self
            .conn
            .execute(stmt.sql(), params_from_iter(stmt.params()))?;
        Ok(removed)
    }

    fn list_tables(&self) -> StoreResult<Vec<TableName>> {
        let mut tables = Vec::new();
        for name in user_table_names(&self.conn)? {
            match TableName::new(&name) {
                Ok(table) => tables.push(table),
                Err(e) => tracing::warn!(table = %name, error = %e, "skipping table"),
            }
        }
        Ok(tables)
    }

    fn unsupported_tables(&self) -> StoreResult<Vec<String>> {
        Ok(user_table_names(&self.conn)?
            .into_iter()
            .filter(|name| TableName::new(name).is_err())
            .collect())
    }

    fn table_stats(&self, table: &TableName) -> StoreResult<TableStats> {
        let quoted = table.quoted();

        let total: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", quoted), [], |row| {
                    row.get(0)
                })?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT Label, HighSeverity, COUNT(*) FROM {} GROUP BY Label, HighSeverity",
            quoted
        ))?;
        let groups = stmt
            .query_map([], |row| {
                let label: Option<String> = row.get(0)?;
                let high: Option<bool> = row.get(1)?;
                let count: i64 = row.get(2)?;
                Ok(LabelCount::new(
                    label.unwrap_or_default(),
                    Severity::from_high(high.unwrap_or(false)),
                    count,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(TableStats::new(table.clone(), total, groups))
    }
}
