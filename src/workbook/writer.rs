//! Rendering summary rows into a styled workbook with rust_xlsxwriter.
//!
//! The header row is bold on a light-gray fill; each data row is filled
//! with the colour of the [`SeverityTier`] it was classified into. The tier
//! is passed in with the row, never re-derived from written cells.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook, XlsxError};
use tempfile::NamedTempFile;
use tracing::info;

use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{SeverityTier, SummaryRow};

/// Column headers of the generated report.
pub const OUTPUT_HEADERS: [&str; 5] = [
    "Employee Number",
    "Employee Name",
    "Reporting To",
    "Time Period",
    "Status",
];

/// Header row fill (light gray).
pub const HEADER_FILL: u32 = 0xD3D3D3;

/// Returns the RGB row fill for a severity tier.
///
/// # Example
///
/// ```
/// use timesheet_report::models::SeverityTier;
/// use timesheet_report::workbook::tier_fill;
///
/// assert_eq!(tier_fill(SeverityTier::Critical), 0xFF0000);
/// assert_eq!(tier_fill(SeverityTier::Low), 0xFFFFFF);
/// ```
pub fn tier_fill(tier: SeverityTier) -> u32 {
    match tier {
        SeverityTier::Critical => 0xFF0000,
        SeverityTier::High => 0xFFA500,
        SeverityTier::Medium => 0xFFFF00,
        SeverityTier::Low => 0xFFFFFF,
    }
}

fn tier_format(tier: SeverityTier) -> Format {
    Format::new().set_background_color(Color::RGB(tier_fill(tier)))
}

/// One rendered data row: the five cell texts plus the style to apply.
struct RenderedRow<'a> {
    cells: [&'a str; 5],
    numeric_id: Option<u64>,
    tier: SeverityTier,
}

impl<'a> RenderedRow<'a> {
    fn from_summary(row: &'a SummaryRow) -> Self {
        Self {
            cells: [
                row.employee_number.as_str(),
                row.employee_name.as_str(),
                row.reporting_to.as_str(),
                row.time_period.as_str(),
                row.status.as_str(),
            ],
            numeric_id: row.employee_number.as_integer(),
            tier: row.tier,
        }
    }
}

/// Computes each column's width: the widest cell (header included) in
/// characters, plus 2, scaled by 1.2.
pub fn column_widths(rows: &[SummaryRow]) -> [f64; 5] {
    let mut widest = OUTPUT_HEADERS.map(|h| h.chars().count());
    for row in rows.iter().map(RenderedRow::from_summary) {
        for (width, cell) in widest.iter_mut().zip(row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widest.map(|w| (w + 2) as f64 * 1.2)
}

/// Renders the report into an in-memory `.xlsx` file.
///
/// # Errors
///
/// Returns [`EngineError::OutputWrite`] if the workbook cannot be built.
pub fn render_workbook(rows: &[SummaryRow], config: &ReportConfig) -> EngineResult<Vec<u8>> {
    build_workbook(rows, config).map_err(|e| EngineError::OutputWrite {
        path: "<memory>".to_string(),
        message: e.to_string(),
    })
}

fn build_workbook(rows: &[SummaryRow], config: &ReportConfig) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.sheet_title)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL));
    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, row) in rows.iter().map(RenderedRow::from_summary).enumerate() {
        let row_num = (index + 1) as u32;
        let format = tier_format(row.tier);

        match row.numeric_id {
            Some(id) => worksheet.write_number_with_format(row_num, 0, id as f64, &format)?,
            None => worksheet.write_string_with_format(row_num, 0, row.cells[0], &format)?,
        };
        for (col, cell) in row.cells.iter().enumerate().skip(1) {
            worksheet.write_string_with_format(row_num, col as u16, *cell, &format)?;
        }
    }

    for (col, width) in column_widths(rows).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    workbook.save_to_buffer()
}

/// Renders the report and commits it to `path`.
///
/// The workbook is fully built in memory, written to a temporary file next
/// to `path` and renamed into place, so `path` either holds a complete
/// report or is left untouched.
///
/// # Errors
///
/// Returns [`EngineError::OutputWrite`] if rendering, writing or the final
/// rename fails.
pub fn write_report<P: AsRef<Path>>(
    rows: &[SummaryRow],
    path: P,
    config: &ReportConfig,
) -> EngineResult<()> {
    let path = path.as_ref();
    let output_error = |message: String| EngineError::OutputWrite {
        path: path.display().to_string(),
        message,
    };

    let bytes = build_workbook(rows, config).map_err(|e| output_error(e.to_string()))?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staging = NamedTempFile::new_in(dir).map_err(|e| output_error(e.to_string()))?;
    staging
        .write_all(&bytes)
        .and_then(|_| staging.as_file().sync_all())
        .map_err(|e| output_error(e.to_string()))?;
    staging
        .persist(path)
        .map_err(|e| output_error(e.error.to_string()))?;

    info!(path = %path.display(), rows = rows.len(), bytes = bytes.len(), "Wrote report");
    Ok(())
}
