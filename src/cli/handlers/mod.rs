//! Command handlers for the CLI.

mod clear;
mod completions;
mod show;
mod stats;
mod write;


use anyhow::{Result, anyhow};

use super::FilterArgs;
use super::config::OperationDefaults;
use super::date_filter::DateBound;
use crate::domain::ViewPreference;
use crate::store::{NoteFilter, NoteQuery};

// Re-export public items
pub use clear::{clear_notes, clear_target, handle_clear};
pub use completions::handle_completions;
pub use show::{display_order, handle_show, render_notes, show_notes};
pub use stats::{StatsReport, collect_stats, handle_stats, render_stats};
pub use write::{compose_content, create_note, handle_write, read_piped_stdin, write_note};

// ===========================================
// Shared Utilities
// ===========================================

/// Separator printed between notes and between tables.
pub(crate) const SEPARATOR: &str =
    "----------------------------------------------------------------------";

/// Resolves the view preference, rejecting `--oldest` together with `--recent`.
pub(crate) fn resolve_view(
    filter: &FilterArgs,
    defaults: &OperationDefaults,
) -> Result<ViewPreference> {
    Ok(ViewPreference::from_flags(
        filter.oldest,
        filter.recent,
        defaults.default_view,
    )?)
}

/// Builds the bounded query for show or clear from flags and config defaults.
///
/// Runs before the database is touched, so user errors (conflicting view
/// flags, malformed dates) never cause a read or a mutation.
pub fn build_query(filter: &FilterArgs, defaults: &OperationDefaults) -> Result<NoteQuery> {
    let view = resolve_view(filter, defaults)?;

    let mut note_filter = NoteFilter::new()
        .high_only(filter.high)
        .low_only(filter.low);

    if let Some(label) = defaults.filter_label(filter.label.as_deref()) {
        note_filter = note_filter.label(label);
    }

    if let Some(after) = non_empty(filter.after.as_deref()) {
        let bound = DateBound::parse(after).map_err(|e| anyhow!("invalid --after: {}", e))?;
        note_filter = note_filter.after(bound.key());
    }

    if let Some(before) = non_empty(filter.before.as_deref()) {
        let bound = DateBound::parse(before).map_err(|e| anyhow!("invalid --before: {}", e))?;
        note_filter = note_filter.before(bound.key());
    }

    let limit = defaults.count(filter.num_notes);
    tracing::debug!(?view, limit, "built note query");
    Ok(NoteQuery::new(note_filter, view, limit))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
