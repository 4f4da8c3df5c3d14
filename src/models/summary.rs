//! Summary row and severity tier models.

use serde::{Deserialize, Serialize};

use super::record::EmployeeNumber;

/// How long an employee's timesheets have gone unsubmitted, bucketed.
///
/// The tier drives the row colour in the rendered workbook and is not
/// itself written as a column.
///
/// # Example
///
/// ```
/// use timesheet_report::models::SeverityTier;
///
/// assert_eq!(SeverityTier::High.to_string(), "high");
/// assert!(SeverityTier::Critical > SeverityTier::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// One week or less.
    Low,
    /// Exactly two weeks.
    Medium,
    /// Exactly three weeks.
    High,
    /// More than three weeks.
    Critical,
}

impl SeverityTier {
    /// All tiers, most severe first.
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Critical,
        SeverityTier::High,
        SeverityTier::Medium,
        SeverityTier::Low,
    ];

    /// Returns the lowercase tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
            SeverityTier::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The employee's identifier.
    pub employee_number: EmployeeNumber,
    /// The employee's name.
    pub employee_name: String,
    /// The employee's manager.
    pub reporting_to: String,
    /// The unsubmitted range, e.g. `Jan 01, 2024 - Jan 21, 2024`.
    pub time_period: String,
    /// Always `Not Submitted`.
    pub status: String,
    /// Whole weeks covered by the range, at least 1.
    pub duration_weeks: i64,
    /// Severity bucket derived from `duration_weeks`.
    pub tier: SeverityTier,
}
