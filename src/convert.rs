//! End-to-end conversion of an exported report into a summary workbook.
//!
//! This is the batch entry point: read the input file, run the pipeline and
//! commit the rendered workbook. The output file is only created once the
//! whole report has been assembled.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{SeverityTier, SummaryRow};
use crate::pipeline::run_pipeline;
use crate::workbook::{read_table, write_report};

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Number of employees in the report.
    pub employees: usize,
    /// Number of report rows per severity tier.
    pub tier_counts: BTreeMap<SeverityTier, usize>,
}

impl ConversionSummary {
    /// Tallies the rows of an assembled report.
    pub fn from_rows(rows: &[SummaryRow]) -> Self {
        let mut tier_counts = BTreeMap::new();
        for row in rows {
            *tier_counts.entry(row.tier).or_insert(0) += 1;
        }
        Self {
            employees: rows.len(),
            tier_counts,
        }
    }

    /// Returns how many rows fell into `tier`.
    pub fn count(&self, tier: SeverityTier) -> usize {
        self.tier_counts.get(&tier).copied().unwrap_or(0)
    }
}

/// Converts `input` into a summary workbook at `output`.
///
/// # Errors
///
/// Any input-format, no-matching-data or output error aborts the
/// conversion; in every case `output` is left as it was.
///
/// # Example
///
/// ```no_run
/// use timesheet_report::config::ReportConfig;
/// use timesheet_report::convert::convert_file;
///
/// let summary = convert_file("export.xlsx", "summary_colored.xlsx", &ReportConfig::default())?;
/// println!("{} employees with unsubmitted timesheets", summary.employees);
/// # Ok::<(), timesheet_report::error::EngineError>(())
/// ```
pub fn convert_file<P, Q>(input: P, output: Q, config: &ReportConfig) -> EngineResult<ConversionSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let table = read_table(input, config.metadata_rows)?;
    let rows = run_pipeline(&table)?;
    write_report(&rows, output, config)?;

    let summary = ConversionSummary::from_rows(&rows);
    info!(
        input = %input.display(),
        output = %output.display(),
        employees = summary.employees,
        critical = summary.count(SeverityTier::Critical),
        "Conversion completed"
    );
    Ok(summary)
}

/// Returns a fresh output file name of the form
/// `timesheet_summary_<YYYYMMDD_HHMMSS>_<8 hex>.xlsx`.
///
/// The random suffix keeps names distinct for requests landing in the same
/// second.
pub fn unique_output_name() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("timesheet_summary_{}_{}.xlsx", timestamp, &suffix[..8])
}
