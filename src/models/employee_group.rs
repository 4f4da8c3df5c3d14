//! Employee grouping models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{EmployeeNumber, RawRecord};

/// The identity records are grouped by.
///
/// All three fields take part in equality, so an employee whose manager
/// changed mid-report forms two groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeKey {
    /// The `Employee Number` column.
    pub employee_number: EmployeeNumber,
    /// The `Employee` column.
    pub employee_name: String,
    /// The `Reporting To` column.
    pub reporting_to: String,
}

impl From<&RawRecord> for EmployeeKey {
    fn from(record: &RawRecord) -> Self {
        Self {
            employee_number: record.employee_number.clone(),
            employee_name: record.employee_name.clone(),
            reporting_to: record.reporting_to.clone(),
        }
    }
}

/// The unsubmitted date range of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeGroup {
    /// Who the range belongs to.
    pub key: EmployeeKey,
    /// Earliest start date across the group's records.
    pub min_start_date: NaiveDate,
    /// Latest end date across the group's records.
    pub max_end_date: NaiveDate,
}

impl EmployeeGroup {
    /// Starts a group from a single record's dates.
    pub fn new(key: EmployeeKey, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            key,
            min_start_date: start_date,
            max_end_date: end_date,
        }
    }

    /// Widens the group's range to cover another record.
    pub fn absorb(&mut self, start_date: NaiveDate, end_date: NaiveDate) {
        self.min_start_date = self.min_start_date.min(start_date);
        self.max_end_date = self.max_end_date.max(end_date);
    }
}
