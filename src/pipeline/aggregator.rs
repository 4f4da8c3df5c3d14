//! Per-employee aggregation of filtered records.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{EmployeeGroup, EmployeeKey, ParsedRecord};

/// Groups records by employee and reduces each group to its overall range.
///
/// Groups are keyed on employee number, name and manager together, and
/// are returned in key order: employee number (numerically where possible),
/// then name, then manager. The result does not depend on input order.
///
/// # Example
///
/// ```
/// use timesheet_report::models::{EmployeeNumber, ParsedRecord, RawRecord};
/// use timesheet_report::pipeline::aggregate;
/// use chrono::NaiveDate;
///
/// let week = |start: (u32, u32), end: (u32, u32)| ParsedRecord {
///     raw: RawRecord {
///         employee_number: EmployeeNumber::new("1001"),
///         employee_name: "Ada".to_string(),
///         reporting_to: "Grace".to_string(),
///         timesheet_period: String::new(),
///         status: "Not Submitted".to_string(),
///     },
///     start_date: NaiveDate::from_ymd_opt(2024, start.0, start.1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, end.0, end.1).unwrap(),
/// };
///
/// let groups = aggregate(&[week((1, 15), (1, 21)), week((1, 1), (1, 7))]);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].min_start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(groups[0].max_end_date, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
/// ```
pub fn aggregate(records: &[ParsedRecord]) -> Vec<EmployeeGroup> {
    let mut groups: BTreeMap<EmployeeKey, EmployeeGroup> = BTreeMap::new();

    for record in records {
        let key = EmployeeKey::from(&record.raw);
        match groups.get_mut(&key) {
            Some(group) => group.absorb(record.start_date, record.end_date),
            None => {
                let group = EmployeeGroup::new(key.clone(), record.start_date, record.end_date);
                groups.insert(key, group);
            }
        }
    }

    debug!(records = records.len(), groups = groups.len(), "Aggregated records by employee");
    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeNumber, RawRecord};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(
        number: &str,
        name: &str,
        reporting_to: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ParsedRecord {
        ParsedRecord {
            raw: RawRecord {
                employee_number: EmployeeNumber::new(number),
                employee_name: name.to_string(),
                reporting_to: reporting_to.to_string(),
                timesheet_period: String::new(),
                status: "Not Submitted".to_string(),
            },
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_groups_same_employee_across_weeks() {
        let records = vec![
            record("1", "Ada", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
            record("1", "Ada", "Grace", date(2024, 1, 15), date(2024, 1, 21)),
        ];
        let groups = aggregate(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].min_start_date, date(2024, 1, 1));
        assert_eq!(groups[0].max_end_date, date(2024, 1, 21));
    }

    #[test]
    fn test_manager_change_splits_group() {
        let records = vec![
            record("1", "Ada", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
            record("1", "Ada", "Alan", date(2024, 1, 8), date(2024, 1, 14)),
        ];
        let groups = aggregate(&records);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.key.employee_number.as_str() == "1"));
    }

    #[test]
    fn test_groups_are_ordered_by_employee_number() {
        let records = vec![
            record("10", "Alan", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
            record("2", "Ada", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
            record("33", "Edsger", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
        ];
        let numbers: Vec<String> = aggregate(&records)
            .into_iter()
            .map(|g| g.key.employee_number.to_string())
            .collect();
        assert_eq!(numbers, vec!["2", "10", "33"]);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let mut records = vec![
            record("1", "Ada", "Grace", date(2024, 1, 8), date(2024, 1, 14)),
            record("2", "Alan", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
            record("1", "Ada", "Grace", date(2024, 1, 1), date(2024, 1, 7)),
        ];
        let forward = aggregate(&records);
        records.reverse();
        assert_eq!(forward, aggregate(&records));
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(aggregate(&[]).is_empty());
    }
}
