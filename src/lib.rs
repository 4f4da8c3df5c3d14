//! Unsubmitted Timesheet Report Generator
//!
//! This crate reads an exported timesheet status report, finds employees
//! whose timesheets are `Not Submitted`, works out how many weeks each has
//! been outstanding and writes a colour-coded summary workbook. It can be
//! used as a batch converter or through a small upload/download web service.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod workbook;
