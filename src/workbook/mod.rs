//! Spreadsheet input and output.
//!
//! [`read_table`] loads the first worksheet of an exported report into a
//! [`RawTable`](crate::models::RawTable); [`write_report`] renders summary
//! rows into a styled single-sheet workbook.

mod reader;
mod writer;

pub use reader::{read_table, table_from_rows};
pub use writer::{
    HEADER_FILL, OUTPUT_HEADERS, column_widths, render_workbook, tier_fill, write_report,
};
