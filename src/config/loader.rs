//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, ReportConfig, ServiceConfig};

/// Loads and provides access to the application configuration.
///
/// The configuration is read once at startup and then handed explicitly to
/// the conversion and service layers.
///
/// # File format
///
/// ```yaml
/// report:
///   metadata_rows: 2
///   sheet_title: Timesheet Summary
/// service:
///   bind_address: 127.0.0.1:5000
///   upload_dir: uploads
///   processed_dir: processed
///   allowed_extensions: [xlsx, xls]
///   max_upload_bytes: 16777216
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timesheet-report.yaml")?;
/// println!("Listening on {}", loader.service().bind_address);
/// # Ok::<(), timesheet_report::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read.
    /// - [`EngineError::ConfigParseError`] if it is not valid YAML or has
    ///   fields of the wrong type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        &self.config.report
    }

    /// Returns the web service settings.
    pub fn service(&self) -> &ServiceConfig {
        &self.config.service
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config/timesheet-report.yaml"
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.report().metadata_rows, 2);
        assert_eq!(loader.service().processed_dir, PathBuf::from("processed"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/timesheet-report.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "report:\n  metadata_rows: lots\n").unwrap();

        match ConfigLoader::load(&path) {
            Err(EngineError::ConfigParseError { path: reported, message }) => {
                assert_eq!(reported, path.display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_document_is_default() {
        let loader = ConfigLoader::from_yaml_str("   \n").unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let loader = ConfigLoader::from_yaml_str(
            "report:\n  metadata_rows: 0\nservice:\n  allowed_extensions: [xlsx]\n",
        )
        .unwrap();
        assert_eq!(loader.report().metadata_rows, 0);
        assert!(!loader.service().is_allowed_file("old.xls"));
    }
}
