//! Configuration types for the report generator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every field has a
//! default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that shape how a report is read and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of leading metadata rows above the header row.
    pub metadata_rows: usize,
    /// Name of the single worksheet in the generated workbook.
    pub sheet_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metadata_rows: 2,
            sheet_title: "Timesheet Summary".to_string(),
        }
    }
}

/// Settings for the upload/convert/download web service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
    /// Directory uploaded spreadsheets are stored in.
    pub upload_dir: PathBuf,
    /// Directory generated reports are written to and served from.
    pub processed_dir: PathBuf,
    /// Accepted upload extensions, lowercase, without the dot.
    pub allowed_extensions: Vec<String>,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            upload_dir: PathBuf::from("uploads"),
            processed_dir: PathBuf::from("processed"),
            allowed_extensions: vec!["xlsx".to_string(), "xls".to_string()],
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ServiceConfig {
    /// Returns true if `filename` has one of the allowed extensions.
    ///
    /// The comparison is case-insensitive and uses the text after the last
    /// dot; a name without a dot is never allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_report::config::ServiceConfig;
    ///
    /// let config = ServiceConfig::default();
    /// assert!(config.is_allowed_file("report.XLSX"));
    /// assert!(config.is_allowed_file("legacy.xls"));
    /// assert!(!config.is_allowed_file("report.csv"));
    /// assert!(!config.is_allowed_file("xlsx"));
    /// ```
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| {
                let ext = ext.to_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report reading and rendering settings.
    pub report: ReportConfig,
    /// Web service settings.
    pub service: ServiceConfig,
}
