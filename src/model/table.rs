//! Table types.

use serde::{Deserialize, Serialize};

/// A raw cell grid as yielded by the table-extraction collaborator.
///
/// Cells may be missing (`None`); rows may be ragged. A grid whose first
/// row is empty or missing is treated as a mis-detected non-table artifact
/// and dropped by the transcriber.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    /// Rows of optional cells
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create a raw table from rows of optional cells.
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Create a raw table from rows of plain strings (every cell present).
    pub fn from_strings<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
                .collect(),
        }
    }

    /// Check if the grid has a usable header row.
    pub fn has_header(&self) -> bool {
        self.rows.first().is_some_and(|row| !row.is_empty())
    }
}

/// A transcribed table: a header row plus body rows.
///
/// Missing cells have been resolved to empty strings. Body rows keep their
/// own arity; ragged grids are preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Header cells
    pub header: Vec<String>,

    /// Body rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Get the number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
