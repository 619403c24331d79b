//! Parameterized statement builders for selecting and clearing notes.
//!
//! Show and clear share one bounded selection: filter, order by `CreatedAt`,
//! then take the first N rows. Show fetches that selection; clear deletes
//! exactly the rows it identifies. Every value is bound as a parameter; only
//! the validated table name is interpolated.

use crate::domain::{NO_LABEL_SENTINEL, SortOrder, TableName, ViewPreference};
use rusqlite::types::Value;

/// Columns selected for a note, in decode order.
///
/// The key is read through SQLite's `rowid` alias so tables keyed `id` by
/// older jot versions resolve the same way as `row_id` tables.
pub(crate) const NOTE_COLUMNS: &str = "rowid AS row_id, Label, Content, CreatedAt, HighSeverity";

// ===========================================
// Statement
// ===========================================

/// SQL text with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

// ===========================================
// NoteFilter
// ===========================================

/// Conjunctive row filter shared by show and clear.
///
/// Date bounds are `YYYY-MM-DD` keys compared lexicographically against the
/// ISO text in `CreatedAt`: a note written any time on the `after` day
/// matches, a note written on the `before` day does not.
///
/// `high_only` and `low_only` are independent. Setting both is legal and
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    label: Option<String>,
    after: Option<String>,
    before: Option<String>,
    high_only: bool,
    low_only: bool,
}

impl NoteFilter {
    /// Creates a filter that matches every note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to notes with this label.
    ///
    /// The `no-label` sentinel clears any label restriction instead.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = if label == NO_LABEL_SENTINEL {
            None
        } else {
            Some(label)
        };
        self
    }

    /// Restricts to notes created after the start of this date key.
    pub fn after(mut self, date: impl Into<String>) -> Self {
        self.after = Some(date.into());
        self
    }

    /// Restricts to notes created before this date key.
    pub fn before(mut self, date: impl Into<String>) -> Self {
        self.before = Some(date.into());
        self
    }

    pub fn high_only(mut self, yes: bool) -> Self {
        self.high_only = yes;
        self
    }

    pub fn low_only(mut self, yes: bool) -> Self {
        self.low_only = yes;
        self
    }

    /// Returns the label restriction, if any.
    pub fn label_filter(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Appends a `WHERE` clause for this filter to `sql`, pushing bound values.
    fn write_where(&self, sql: &mut String, params: &mut Vec<Value>) {
        let mut predicates: Vec<&str> = Vec::new();

        if let Some(label) = &self.label {
            predicates.push("Label = ?");
            params.push(Value::Text(label.clone()));
        }
        if let Some(after) = &self.after {
            predicates.push("CreatedAt > ?");
            params.push(Value::Text(after.clone()));
        }
        if let Some(before) = &self.before {
            predicates.push("CreatedAt < ?");
            params.push(Value::Text(before.clone()));
        }
        if self.high_only {
            predicates.push("HighSeverity = 1");
        }
        if self.low_only {
            predicates.push("HighSeverity = 0");
        }

        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }
    }
}

// ===========================================
// NoteQuery
// ===========================================

/// A filter bounded to the first `limit` rows in the preferred order.
///
/// A limit of zero or below selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    filter: NoteFilter,
    view: ViewPreference,
    limit: i64,
}

impl NoteQuery {
    pub fn new(filter: NoteFilter, view: ViewPreference, limit: i64) -> Self {
        Self {
            filter,
            view,
            limit,
        }
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn view(&self) -> ViewPreference {
        self.view
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns the order rows are bounded (and fetched) in.
    pub fn order(&self) -> SortOrder {
        self.view.sort_order()
    }

    /// Builds the bounded selection of full note rows.
    pub fn select_statement(&self, table: &TableName) -> Statement {
        let mut params = Vec::new();
        let mut sql = format!("SELECT {} FROM {}", NOTE_COLUMNS, table.quoted());
        self.write_bounds(&mut sql, &mut params);
        Statement::new(sql, params)
    }

    /// Builds a delete of exactly the rows the bounded selection identifies.
    pub fn delete_statement(&self, table: &TableName) -> Statement {
        let mut params = Vec::new();
        let quoted = table.quoted();
        let mut inner = format!("SELECT rowid FROM {}", quoted);
        self.write_bounds(&mut inner, &mut params);
        let sql = format!("DELETE FROM {} WHERE rowid IN ({})", quoted, inner);
        Statement::new(sql, params)
    }

    fn write_bounds(&self, sql: &mut String, params: &mut Vec<Value>) {
        self.filter.write_where(sql, params);
        let order = self.order().as_sql();
        sql.push_str(&format!(
            " ORDER BY CreatedAt {order}, rowid {order} LIMIT ?"
        ));
        // SQLite treats a negative LIMIT as unbounded
        params.push(Value::Integer(self.limit.max(0)));
    }
}

// ===========================================
// ClearTarget
// ===========================================

/// What a clear removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearTarget {
    /// One row by id; all other filters are ignored.
    Row(i64),
    /// The rows selected by a bounded query.
    Matching(NoteQuery),
}

impl ClearTarget {
    pub fn delete_statement(&self, table: &TableName) -> Statement {
        match self {
            Self::Row(row_id) => Statement::new(
                format!("DELETE FROM {} WHERE rowid = ?", table.quoted()),
                vec![Value::Integer(*row_id)],
            ),
            Self::Matching(query) => query.delete_statement(table),
        }
    }
}
