//! Query execution against a caller-provided SQLite connection.
//!
//! The connection's lifecycle is managed by the caller; this module only
//! prepares, runs, and materializes individual statements.

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::Serialize;

use crate::error::Result;

/// Materialized result of a single query.
///
/// Rows follow result-set iteration order; columns follow the statement's
/// column ordering. A `None` cell is a SQL NULL.
#[derive(Serialize, Clone, Debug)]
pub struct QueryOutput {
    pub sql: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Execute a query and materialize the full result set as text cells.
///
/// Preparation and step failures surface as `Err`, so an empty `rows`
/// vector always means the query succeeded with zero rows.
pub fn query(conn: &Connection, sql: &str) -> Result<QueryOutput> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let column_count = columns.len();

    let mut rows = Vec::new();
    let mut raw = stmt.query([])?;
    while let Some(row) = raw.next()? {
        let mut cells = Vec::with_capacity(column_count);
        for i in 0..column_count {
            cells.push(render_cell(row.get_ref(i)?));
        }
        rows.push(cells);
    }

    Ok(QueryOutput {
        sql: sql.to_string(),
        columns,
        rows,
    })
}

/// Execute a query and render the rows as plain text.
///
/// Lossy convenience surface: a NULL cell renders as the empty string, and
/// any failure renders as an empty table, indistinguishable from a zero-row
/// result. Use [`query`] when either distinction matters.
pub fn query_text(conn: &Connection, sql: &str) -> Vec<Vec<String>> {
    match query(conn, sql) {
        Ok(output) => output
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.unwrap_or_default()).collect())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Render one cell the way SQLite coerces values to text.
fn render_cell(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
    }
}
