//! Stats command handler.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use super::SEPARATOR;
use crate::cli::StatsArgs;
use crate::cli::output::{Output, OutputFormat, StatsListing, TableStatsListing};
use crate::store::{NoteRepository, SqliteStore, TableStats};

/// Counts for every user table in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub tables: Vec<TableStats>,
    /// Tables present in the file whose names jot cannot address.
    pub unsupported: Vec<String>,
}

impl StatsReport {
    /// Returns the number of user tables, counted or not.
    pub fn total_tables(&self) -> usize {
        self.tables.len() + self.unsupported.len()
    }
}

/// Collects counts for every user table.
pub fn collect_stats<R: NoteRepository>(repo: &R) -> Result<StatsReport> {
    let tables = repo
        .list_tables()?
        .iter()
        .map(|table| {
            repo.table_stats(table)
                .with_context(|| format!("failed to read stats for table {}", table))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StatsReport {
        tables,
        unsupported: repo.unsupported_tables()?,
    })
}

/// Writes stats in the human-readable layout.
pub fn render_stats<W: Write>(out: &mut W, report: &StatsReport) -> io::Result<()> {
    writeln!(out, "Total number of tables: {}", report.total_tables())?;
    writeln!(out)?;

    for table in &report.tables {
        writeln!(out, "Table: {}", table.table())?;
        writeln!(out, "    Total rows: {}", table.total())?;
        for group in table.groups() {
            writeln!(
                out,
                "    Label: {} | Severity: {} | Count: {}",
                group.label(),
                group.severity(),
                group.count()
            )?;
        }
        writeln!(out, "{}", SEPARATOR)?;
    }

    for name in &report.unsupported {
        writeln!(out, "Table: {}", name)?;
        writeln!(out, "    Skipped: name is not a supported table name")?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}

pub fn handle_stats(args: &StatsArgs, db_path: &Path) -> Result<()> {
    let store = SqliteStore::open_existing(db_path)?;
    let report = collect_stats(&store)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Human => render_stats(&mut out, &report)?,
        OutputFormat::Json => {
            let listing = StatsListing {
                total_tables: report.total_tables(),
                tables: report.tables.iter().map(TableStatsListing::from).collect(),
                unsupported_tables: report.unsupported.clone(),
            };
            writeln!(
                out,
                "{}",
                serde_json::to_string_pretty(&Output::new(listing))?
            )?;
        }
    }

    Ok(())
}
