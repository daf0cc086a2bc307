//! Table transcription from raw cell grids.

use crate::model::{RawTable, Table};

/// Transcribe a page's raw tables, dropping grids without a header row.
pub fn transcribe(raw_tables: &[RawTable]) -> Vec<Table> {
    raw_tables.iter().filter_map(transcribe_table).collect()
}

/// Transcribe one raw grid into a table.
///
/// Returns `None` when the grid has no rows or its first row is empty: a
/// table without header cells is assumed to be a mis-detected non-table
/// artifact. Missing cells become empty strings; body rows that are
/// entirely absent are skipped, while ragged rows keep their own arity.
pub fn transcribe_table(raw: &RawTable) -> Option<Table> {
    let first = raw.rows.first()?;
    if first.is_empty() {
        log::debug!("dropping table with empty header row");
        return None;
    }

    let header = first.iter().map(cell_text).collect();
    let rows = raw.rows[1..]
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Some(Table { header, rows })
}

fn cell_text(cell: &Option<String>) -> String {
    cell.clone().unwrap_or_default()
}
