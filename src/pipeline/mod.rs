//! The unsubmitted-timesheet pipeline.
//!
//! Each stage lives in its own module and is usable on its own:
//!
//! 1. [`parse_records`] turns a [`RawTable`] into typed records.
//! 2. [`filter_by_status`] keeps the `Not Submitted` rows.
//! 3. [`aggregate`] reduces them to one date range per employee.
//! 4. [`classify`] computes the duration in weeks and its severity tier.
//! 5. [`assemble_report`] orders the result for rendering.
//!
//! [`run_pipeline`] chains all five.

mod aggregator;
mod duration;
mod report;
mod row_parser;
mod status_filter;

pub use aggregator::aggregate;
pub use duration::{ClassifiedGroup, classify, classify_severity, duration_weeks, format_time_period};
pub use report::assemble_report;
pub use row_parser::{
    EMPLOYEE_NAME_COLUMN, EMPLOYEE_NUMBER_COLUMN, REPORTING_TO_COLUMN, REQUIRED_COLUMNS,
    STATUS_COLUMN, TIMESHEET_PERIOD_COLUMN, parse_records, parse_report_date, split_period,
};
pub use status_filter::{NOT_SUBMITTED, filter_by_status};

use tracing::info;

use crate::error::EngineResult;
use crate::models::{RawTable, SummaryRow};

/// Runs every stage over a table and returns the ordered report rows.
///
/// # Errors
///
/// - An input-format error if a required column is missing or any
///   `Timesheet Period` value cannot be parsed.
/// - [`EngineError::NoMatchingRecords`](crate::error::EngineError::NoMatchingRecords)
///   if no row has status `Not Submitted`.
///
/// # Example
///
/// ```
/// use timesheet_report::models::{RawTable, SeverityTier};
/// use timesheet_report::pipeline::run_pipeline;
///
/// let headers = ["Employee Number", "Employee", "Reporting To", "Timesheet Period", "Status"]
///     .iter()
///     .map(|h| h.to_string())
///     .collect();
/// let rows = vec![
///     vec!["1001", "Ada", "Grace", "Jan 01, 2024 - Jan 07, 2024", "Not Submitted"],
///     vec!["1001", "Ada", "Grace", "Jan 15, 2024 - Jan 21, 2024", "Not Submitted"],
///     vec!["1002", "Alan", "Grace", "Jan 01, 2024 - Jan 07, 2024", "Approved"],
/// ]
/// .into_iter()
/// .map(|r| r.into_iter().map(String::from).collect())
/// .collect();
///
/// let report = run_pipeline(&RawTable::new(headers, rows)).unwrap();
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].time_period, "Jan 01, 2024 - Jan 21, 2024");
/// assert_eq!(report[0].duration_weeks, 3);
/// assert_eq!(report[0].tier, SeverityTier::High);
/// ```
pub fn run_pipeline(table: &RawTable) -> EngineResult<Vec<SummaryRow>> {
    let records = parse_records(table)?;
    let parsed_count = records.len();

    let retained = filter_by_status(records, NOT_SUBMITTED)?;
    let retained_count = retained.len();

    let groups = aggregate(&retained);
    let classified = groups.into_iter().map(classify).collect();
    let rows = assemble_report(classified);

    info!(
        parsed = parsed_count,
        retained = retained_count,
        employees = rows.len(),
        "Pipeline completed"
    );
    Ok(rows)
}
