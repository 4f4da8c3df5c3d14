//! Application state for the report generator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AppConfig, ReportConfig, ServiceConfig};

/// Shared application state.
///
/// Holds the configuration the service was started with. It is read-only;
/// requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        &self.config.report
    }

    /// Returns the web service settings.
    pub fn service(&self) -> &ServiceConfig {
        &self.config.service
    }

    /// Creates the upload and processed directories if they are missing.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config.service.upload_dir)?;
        std::fs::create_dir_all(&self.config.service.processed_dir)?;
        Ok(())
    }
}
