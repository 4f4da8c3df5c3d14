//! In-memory tabular data as read from a worksheet.

use serde::{Deserialize, Serialize};

/// A header row plus data rows, every cell rendered as text.
///
/// Rows may be shorter than the header; missing trailing cells read as
/// empty strings.
///
/// # Example
///
/// ```
/// use timesheet_report::models::RawTable;
///
/// let table = RawTable::new(
///     vec![" Status ".to_string()],
///     vec![vec!["Not Submitted".to_string()], vec![]],
/// );
/// let status = table.column_index("Status").unwrap();
/// assert_eq!(table.cell(0, status), "Not Submitted");
/// assert_eq!(table.cell(1, status), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table from a header row and its data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Returns the header row as read.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the first column whose whitespace-stripped header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Returns the text of a cell, or `""` past the end of a short row.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}
