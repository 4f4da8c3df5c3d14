//! Configuration loading and management for the report generator.
//!
//! This module provides functionality to load the application settings
//! (report layout and web service options) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timesheet-report.yaml").unwrap();
//! println!("Skipping {} metadata rows", config.report().metadata_rows);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ReportConfig, ServiceConfig};
