//! Show command handler.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use super::{SEPARATOR, build_query};
use crate::cli::ShowArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Note, OperationKind, TableName};
use crate::store::{NoteQuery, NoteRepository, SqliteStore};

/// Reverses a bounded fetch for display.
///
/// The fetch takes the first N notes in the preferred order; display then
/// runs the other way, so "the 5 most recent" prints oldest of the five first
/// and the newest note ends up last.
pub fn display_order(mut fetched: Vec<Note>) -> Vec<Note> {
    fetched.reverse();
    fetched
}

/// Fetches the bounded selection and returns it in display order.
pub fn show_notes<R: NoteRepository>(
    repo: &R,
    table: &TableName,
    query: &NoteQuery,
) -> Result<Vec<Note>> {
    repo.ensure_table(table, OperationKind::Show)?;
    let fetched = repo
        .fetch_notes(table, query)
        .with_context(|| format!("failed to read notes from table {}", table))?;
    Ok(display_order(fetched))
}

/// Writes notes in the human-readable layout, one block per note.
pub fn render_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    if notes.is_empty() {
        writeln!(out, "No notes found.")?;
        return Ok(());
    }

    for note in notes {
        writeln!(out, "Label: {}", note.label())?;
        writeln!(
            out,
            "Row: {}  Created: {}",
            note.row_id(),
            note.created_at().format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out, "Content:")?;
        writeln!(out)?;
        writeln!(out, "{}", note.content())?;
        writeln!(out, "Severity: {}", note.severity())?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn handle_show(args: &ShowArgs, config: &Config, db_path: &Path) -> Result<()> {
    let defaults = config.defaults(OperationKind::Show);
    let query = build_query(&args.filter, defaults)?;
    let table = defaults.table(args.filter.table.as_deref())?;

    let store = SqliteStore::open_existing(db_path)?;
    let notes = show_notes(&store, &table, &query)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Human => render_notes(&mut out, &notes)?,
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}
