//! HTTP API module for the timesheet report generator.
//!
//! This module provides the upload/convert/download endpoints that wrap
//! the conversion pipeline for browser use.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{UploadError, UploadedFile, is_safe_file_name, secure_filename};
pub use response::{ApiErrorResponse, UploadResponse};
pub use state::AppState;
