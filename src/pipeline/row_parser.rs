//! Row parsing: raw table rows into typed records.
//!
//! This module locates the required columns by their whitespace-stripped
//! header names and splits each `Timesheet Period` value into a start and
//! end date. Any failure aborts the whole run.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DATE_FORMAT, EmployeeNumber, PERIOD_DELIMITER, ParsedRecord, RawRecord, RawTable,
};

/// Header of the employee identifier column.
pub const EMPLOYEE_NUMBER_COLUMN: &str = "Employee Number";
/// Header of the employee name column.
pub const EMPLOYEE_NAME_COLUMN: &str = "Employee";
/// Header of the manager column.
pub const REPORTING_TO_COLUMN: &str = "Reporting To";
/// Header of the composite date range column.
pub const TIMESHEET_PERIOD_COLUMN: &str = "Timesheet Period";
/// Header of the submission status column.
pub const STATUS_COLUMN: &str = "Status";

/// Every column the parser needs, in report order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    EMPLOYEE_NUMBER_COLUMN,
    EMPLOYEE_NAME_COLUMN,
    REPORTING_TO_COLUMN,
    TIMESHEET_PERIOD_COLUMN,
    STATUS_COLUMN,
];

/// Resolved positions of the required columns.
struct ColumnLayout {
    employee_number: usize,
    employee_name: usize,
    reporting_to: usize,
    timesheet_period: usize,
    status: usize,
}

impl ColumnLayout {
    fn resolve(table: &RawTable) -> EngineResult<Self> {
        let find = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| EngineError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            timesheet_period: find(TIMESHEET_PERIOD_COLUMN)?,
            status: find(STATUS_COLUMN)?,
            employee_number: find(EMPLOYEE_NUMBER_COLUMN)?,
            employee_name: find(EMPLOYEE_NAME_COLUMN)?,
            reporting_to: find(REPORTING_TO_COLUMN)?,
        })
    }

    fn record(&self, table: &RawTable, row: usize) -> RawRecord {
        RawRecord {
            employee_number: EmployeeNumber::new(table.cell(row, self.employee_number)),
            employee_name: table.cell(row, self.employee_name).to_string(),
            reporting_to: table.cell(row, self.reporting_to).to_string(),
            timesheet_period: table.cell(row, self.timesheet_period).to_string(),
            status: table.cell(row, self.status).to_string(),
        }
    }
}

/// Parses a single report date such as `Jan 05, 2024`.
///
/// # Example
///
/// ```
/// use timesheet_report::pipeline::parse_report_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_report_date("Jan 05, 2024").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
/// );
/// assert!(parse_report_date("2024-01-05").is_err());
/// ```
pub fn parse_report_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Splits a `Timesheet Period` value into its start and end dates.
///
/// The value must contain the delimiter `" - "` exactly once, and the end
/// date must not precede the start date.
///
/// # Example
///
/// ```
/// use timesheet_report::pipeline::split_period;
/// use chrono::NaiveDate;
///
/// let (start, end) = split_period("Jan 01, 2024 - Jan 07, 2024").unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
/// ```
pub fn split_period(value: &str) -> EngineResult<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = value.trim().split(PERIOD_DELIMITER).collect();
    let [start, end] = parts.as_slice() else {
        return Err(EngineError::MalformedPeriod {
            value: value.to_string(),
        });
    };

    let start_date = parse_report_date(start)?;
    let end_date = parse_report_date(end)?;
    if end_date < start_date {
        return Err(EngineError::InvertedPeriod {
            value: value.to_string(),
        });
    }
    Ok((start_date, end_date))
}

/// Parses every data row of a table into a [`ParsedRecord`].
///
/// One record is produced per row, in input order. Row contents other than
/// the timesheet period are not validated here.
///
/// # Errors
///
/// - [`EngineError::MissingColumn`] if any of [`REQUIRED_COLUMNS`] is absent.
/// - [`EngineError::MalformedPeriod`], [`EngineError::InvalidDate`] or
///   [`EngineError::InvertedPeriod`] for the first bad period value.
pub fn parse_records(table: &RawTable) -> EngineResult<Vec<ParsedRecord>> {
    let layout = ColumnLayout::resolve(table)?;

    let mut records = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let raw = layout.record(table, row);
        let (start_date, end_date) = split_period(&raw.timesheet_period).inspect_err(|err| {
            // Data rows start after the header, so report a 1-based data row.
            warn!(row = row + 1, error = %err, "Unparseable timesheet period");
        })?;
        records.push(ParsedRecord {
            raw,
            start_date,
            end_date,
        });
    }

    debug!(records = records.len(), "Parsed timesheet rows");
    Ok(records)
}
