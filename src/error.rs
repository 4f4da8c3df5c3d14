//! Error types for the timesheet report generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can abort a conversion run.

use thiserror::Error;

/// Broad classification of an [`EngineError`].
///
/// Callers branch on the kind rather than on individual variants: the batch
/// entry point only prints the error, while the upload service maps
/// [`ErrorKind::InputFormat`] and [`ErrorKind::NoMatchingData`] to a client
/// error and everything else to a server error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file does not match the documented export layout.
    InputFormat,
    /// The input parsed correctly but contained no matching rows.
    NoMatchingData,
    /// The result workbook could not be built or saved.
    OutputWrite,
    /// The application configuration could not be loaded.
    Configuration,
}

/// The main error type for the timesheet report generator.
///
/// Every error is fatal to the run that produced it; no partial output is
/// written once an error has been raised.
///
/// # Example
///
/// ```
/// use timesheet_report::error::{EngineError, ErrorKind};
///
/// let error = EngineError::MissingColumn {
///     column: "Timesheet Period".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required column not found: 'Timesheet Period'");
/// assert_eq!(error.kind(), ErrorKind::InputFormat);
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input workbook could not be opened or has no usable worksheet.
    #[error("Failed to read input file '{path}': {message}")]
    UnreadableInput {
        /// The path of the input file.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// A required column is absent from the header row.
    #[error("Required column not found: '{column}'")]
    MissingColumn {
        /// The (whitespace-stripped) column name that was expected.
        column: String,
    },

    /// A `Timesheet Period` value does not split into exactly two dates.
    #[error("Malformed 'Timesheet Period' value '{value}': expected '<Mon> <Day>, <Year> - <Mon> <Day>, <Year>'")]
    MalformedPeriod {
        /// The offending period string.
        value: String,
    },

    /// A date inside a `Timesheet Period` value does not match `%b %d, %Y`.
    #[error("Invalid date '{value}' in 'Timesheet Period': expected format like 'Jan 05, 2024'")]
    InvalidDate {
        /// The offending date substring.
        value: String,
    },

    /// A `Timesheet Period` ends before it starts.
    #[error("Invalid 'Timesheet Period' value '{value}': end date precedes start date")]
    InvertedPeriod {
        /// The offending period string.
        value: String,
    },

    /// No record carried the target status.
    #[error("No '{status}' timesheets found.")]
    NoMatchingRecords {
        /// The status value that was filtered for.
        status: String,
    },

    /// The result workbook could not be built or written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite {
        /// The destination path.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::UnreadableInput { .. }
            | EngineError::MissingColumn { .. }
            | EngineError::MalformedPeriod { .. }
            | EngineError::InvalidDate { .. }
            | EngineError::InvertedPeriod { .. } => ErrorKind::InputFormat,
            EngineError::NoMatchingRecords { .. } => ErrorKind::NoMatchingData,
            EngineError::OutputWrite { .. } => ErrorKind::OutputWrite,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    /// Returns true if the error should be reported back to the uploader
    /// verbatim rather than as a generic failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InputFormat | ErrorKind::NoMatchingData
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
