//! Status filtering.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ParsedRecord;

/// The status value the report is built from.
pub const NOT_SUBMITTED: &str = "Not Submitted";

/// Keeps the records whose trimmed status equals `status` exactly.
///
/// The comparison is case-sensitive; only surrounding whitespace is
/// ignored.
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingRecords`] when nothing is retained, so
/// callers can tell an empty result apart from a malformed input.
pub fn filter_by_status(records: Vec<ParsedRecord>, status: &str) -> EngineResult<Vec<ParsedRecord>> {
    let total = records.len();
    let retained: Vec<ParsedRecord> = records
        .into_iter()
        .filter(|record| record.trimmed_status() == status)
        .collect();

    debug!(total, retained = retained.len(), status, "Filtered records by status");

    if retained.is_empty() {
        return Err(EngineError::NoMatchingRecords {
            status: status.to_string(),
        });
    }
    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeNumber, RawRecord};
    use chrono::NaiveDate;

    fn record(number: &str, status: &str) -> ParsedRecord {
        ParsedRecord {
            raw: RawRecord {
                employee_number: EmployeeNumber::new(number),
                employee_name: "Ada".to_string(),
                reporting_to: "Grace".to_string(),
                timesheet_period: "Jan 01, 2024 - Jan 07, 2024".to_string(),
                status: status.to_string(),
            },
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        }
    }

    #[test]
    fn test_keeps_only_not_submitted() {
        let records = vec![
            record("1", "Not Submitted"),
            record("2", "Approved"),
            record("3", "Submitted"),
            record("4", "Not Submitted"),
        ];
        let retained = filter_by_status(records, NOT_SUBMITTED).unwrap();
        let numbers: Vec<&str> = retained
            .iter()
            .map(|r| r.raw.employee_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1", "4"]);
    }

    #[test]
    fn test_trims_before_comparing() {
        let retained = filter_by_status(vec![record("1", " Not Submitted  ")], NOT_SUBMITTED).unwrap();
        assert_eq!(retained.len(), 1);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let err = filter_by_status(vec![record("1", "not submitted")], NOT_SUBMITTED).unwrap_err();
        assert!(matches!(err, EngineError::NoMatchingRecords { .. }));
    }

    #[test]
    fn test_empty_input_is_no_matching_records() {
        let err = filter_by_status(Vec::new(), NOT_SUBMITTED).unwrap_err();
        assert!(matches!(err, EngineError::NoMatchingRecords { ref status } if status == NOT_SUBMITTED));
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        assert!(filter_by_status(vec![record("1", "Not  Submitted")], NOT_SUBMITTED).is_err());
    }
}
