//! Write (default) command handler.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::cli::WriteArgs;
use crate::cli::config::{Config, OperationDefaults};
use crate::domain::{NewNote, OperationKind, Severity, TableName};
use crate::store::{NoteRepository, SqliteStore};

const BANNER: &str = r"
                       _    _______
                      | |  |__   __|
                      | | ___ | |
                  _   | |/ _ \| |
                 | |__| | (_) | |
                  \____/ \___/|_|

      easy and simple cli to jot down your thoughts.
      use jot --help for more.
";

/// Joins note words and appends piped input after a blank line.
///
/// Empty piped input is ignored.
pub fn compose_content(text: &[String], piped: Option<&str>) -> String {
    let mut content = text.join(" ");
    if let Some(piped) = piped.filter(|p| !p.is_empty()) {
        content.push_str("\n\n");
        content.push_str(piped);
    }
    content
}

/// Reads all of standard input when it is not an interactive terminal.
pub fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("failed to read piped input")?;
    Ok(Some(buf))
}

/// Builds the note to append (pure function, no I/O).
pub fn create_note(
    args: &WriteArgs,
    defaults: &OperationDefaults,
    piped: Option<&str>,
    now: DateTime<FixedOffset>,
) -> NewNote {
    let label = defaults.write_label(args.label.as_deref());
    if args.label.as_deref().is_none_or(|l| l.trim().is_empty()) {
        tracing::info!(label = %label, "label is empty, using default");
    }

    NewNote::new(
        label,
        compose_content(&args.text, piped),
        now,
        Severity::from_high(args.high_severity),
    )
}

/// Appends a note, creating the table on first use.
pub fn write_note<R: NoteRepository>(
    repo: &mut R,
    table: &TableName,
    note: &NewNote,
) -> Result<i64> {
    repo.ensure_table(table, OperationKind::Write)?;
    let row_id = repo
        .insert_note(table, note)
        .with_context(|| format!("failed to write note to table {}", table))?;
    Ok(row_id)
}

pub fn handle_write(args: &WriteArgs, config: &Config, db_path: &Path) -> Result<()> {
    if args.text.is_empty() {
        println!("{}", BANNER);
        return Ok(());
    }

    let defaults = config.defaults(OperationKind::Write);
    let table = defaults.table(args.table.as_deref())?;

    let piped = read_piped_stdin()?;
    let note = create_note(args, defaults, piped.as_deref(), Local::now().fixed_offset());

    let mut store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let row_id = write_note(&mut store, &table, &note)?;

    println!("Jotted #{} to {} [{}]", row_id, table, note.label());
    Ok(())
}
