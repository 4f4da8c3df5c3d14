//! Reading exported timesheet reports with calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RawTable;

/// Reads the first worksheet of an `.xlsx`/`.xls` file into a table.
///
/// The first `metadata_rows` rows of the sheet are skipped, the next row
/// becomes the header, and every following row that has at least one
/// non-empty cell becomes a data row.
///
/// # Errors
///
/// Returns [`EngineError::UnreadableInput`] if the file cannot be opened as
/// a workbook, has no worksheets, or has no header row below the metadata.
pub fn read_table<P: AsRef<Path>>(path: P, metadata_rows: usize) -> EngineResult<RawTable> {
    let path = path.as_ref();
    let unreadable = |message: String| EngineError::UnreadableInput {
        path: path.display().to_string(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| unreadable(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| unreadable("workbook contains no worksheets".to_string()))?
        .map_err(|e| unreadable(e.to_string()))?;

    // calamine trims leading empty rows from the range; skip relative to the
    // sheet's first row, not the range's.
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let skip = metadata_rows.saturating_sub(first_row);

    let rows = range
        .rows()
        .skip(skip)
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());

    let table = table_from_rows(rows).ok_or_else(|| {
        unreadable(format!(
            "no header row found after {} metadata rows",
            metadata_rows
        ))
    })?;

    debug!(
        path = %path.display(),
        columns = table.headers().len(),
        rows = table.len(),
        "Read input worksheet"
    );
    Ok(table)
}

/// Builds a table from text rows whose first element is the header.
///
/// Data rows with only empty cells are dropped. Returns `None` when there
/// is no header row.
pub fn table_from_rows<I>(rows: I) -> Option<RawTable>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut rows = rows.into_iter();
    let headers = rows.next()?;
    let data = rows
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .collect();
    Some(RawTable::new(headers, data))
}

/// Renders a cell as the text a user would see for plain values.
///
/// Integral floats lose their fractional part, so an employee number
/// stored as `1001.0` reads as `1001`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cell_text_integral_float_has_no_decimals() {
        assert_eq!(cell_text(&Data::Float(1001.0)), "1001");
        assert_eq!(cell_text(&Data::Float(12.5)), "12.5");
    }

    #[test]
    fn test_cell_text_plain_values() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
        assert_eq!(
            cell_text(&Data::String(" Not Submitted ".to_string())),
            " Not Submitted "
        );
    }

    #[test]
    fn test_table_from_rows_uses_first_row_as_header() {
        let table = table_from_rows(vec![
            strings(&["Employee Number", "Status"]),
            strings(&["1", "Not Submitted"]),
        ])
        .unwrap();
        assert_eq!(table.headers(), &["Employee Number", "Status"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_from_rows_drops_blank_rows() {
        let table = table_from_rows(vec![
            strings(&["A", "B"]),
            strings(&["", "  "]),
            strings(&["x", ""]),
            strings(&[]),
        ])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), "x");
    }

    #[test]
    fn test_table_from_rows_without_header() {
        assert!(table_from_rows(Vec::<Vec<String>>::new()).is_none());
    }

    #[test]
    fn test_read_table_missing_file_is_unreadable() {
        let err = read_table("/nonexistent/report.xlsx", 2).unwrap_err();
        assert!(matches!(err, EngineError::UnreadableInput { .. }));
    }
}
