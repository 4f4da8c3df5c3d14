//! Core data models for the timesheet report generator.
//!
//! This module contains the domain models that flow through one conversion
//! run, from raw spreadsheet rows to the summary rows handed to the renderer.

mod employee_group;
mod record;
mod summary;
mod table;

pub use employee_group::{EmployeeGroup, EmployeeKey};
pub use record::{DATE_FORMAT, EmployeeNumber, PERIOD_DELIMITER, ParsedRecord, RawRecord};
pub use summary::{SeverityTier, SummaryRow};
pub use table::RawTable;
