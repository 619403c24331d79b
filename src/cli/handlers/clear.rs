//! Clear command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{build_query, resolve_view};
use crate::cli::ClearArgs;
use crate::cli::config::{Config, OperationDefaults};
use crate::domain::{OperationKind, TableName};
use crate::store::{ClearTarget, NoteRepository, SqliteStore};

/// Decides what a clear removes.
///
/// `--row-id` overrides every other filter. Conflicting view flags are
/// rejected either way.
pub fn clear_target(args: &ClearArgs, defaults: &OperationDefaults) -> Result<ClearTarget> {
    resolve_view(&args.filter, defaults)?;

    match args.row_id {
        Some(row_id) => Ok(ClearTarget::Row(row_id)),
        None => Ok(ClearTarget::Matching(build_query(&args.filter, defaults)?)),
    }
}

/// Deletes the targeted notes and returns how many were removed.
pub fn clear_notes<R: NoteRepository>(
    repo: &mut R,
    table: &TableName,
    target: &ClearTarget,
) -> Result<usize> {
    repo.ensure_table(table, OperationKind::Clear)?;
    let removed = repo
        .delete_notes(table, target)
        .with_context(|| format!("failed to clear notes from table {}", table))?;
    Ok(removed)
}

pub fn handle_clear(args: &ClearArgs, config: &Config, db_path: &Path) -> Result<()> {
    let defaults = config.defaults(OperationKind::Clear);
    let target = clear_target(args, defaults)?;
    let table = defaults.table(args.filter.table.as_deref())?;

    let mut store = SqliteStore::open_existing(db_path)?;
    let removed = clear_notes(&mut store, &table, &target)?;

    println!("Erased {} note(s) from {}", removed, table);
    Ok(())
}
