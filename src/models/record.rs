//! Input record models.
//!
//! This module defines [`RawRecord`] (one data row of the exported report)
//! and [`ParsedRecord`] (the same row with its timesheet period split into
//! typed dates).

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The `strftime` pattern used for every date in the report, e.g. `Jan 05, 2024`.
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// The literal separator between the two dates of a timesheet period.
pub const PERIOD_DELIMITER: &str = " - ";

/// An employee identifier as it appears in the report.
///
/// Exports usually carry numeric identifiers, but nothing guarantees it, so
/// the raw text is kept. Ordering is numeric for plain integers (so `"9"`
/// sorts before `"10"`), with non-numeric identifiers after all numeric ones
/// in lexical order.
///
/// # Example
///
/// ```
/// use timesheet_report::models::EmployeeNumber;
///
/// let nine = EmployeeNumber::new("9");
/// let ten = EmployeeNumber::new("10");
/// assert!(nine < ten);
/// assert_eq!(ten.as_integer(), Some(10));
/// assert_eq!(EmployeeNumber::new("E-17").as_integer(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeNumber(String);

impl EmployeeNumber {
    /// Creates an employee number from its textual form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier exactly as read from the report.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier as an integer when it is a canonical decimal
    /// number (digits only, no leading zeros).
    pub fn as_integer(&self) -> Option<u64> {
        let s = self.0.as_str();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if s.len() > 1 && s.starts_with('0') {
            return None;
        }
        s.parse().ok()
    }
}

impl Ord for EmployeeNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for EmployeeNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One data row of the exported timesheet report.
///
/// Values are kept as text exactly as they were read; no trimming happens
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// The `Employee Number` column.
    pub employee_number: EmployeeNumber,
    /// The `Employee` column.
    pub employee_name: String,
    /// The `Reporting To` column.
    pub reporting_to: String,
    /// The `Timesheet Period` column, e.g. `Jan 01, 2024 - Jan 07, 2024`.
    pub timesheet_period: String,
    /// The `Status` column.
    pub status: String,
}

/// A [`RawRecord`] whose timesheet period has been split into dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// The source row.
    pub raw: RawRecord,
    /// First day of the timesheet period.
    pub start_date: NaiveDate,
    /// Last day of the timesheet period.
    pub end_date: NaiveDate,
}

impl ParsedRecord {
    /// Returns the record's status with surrounding whitespace removed.
    pub fn trimmed_status(&self) -> &str {
        self.raw.status.trim()
    }
}
