//! Upload request handling for the report generator API.
//!
//! This module extracts the uploaded spreadsheet from a multipart body and
//! provides the filename checks applied to uploads and downloads.

use axum::body::Bytes;
use axum::extract::Multipart;
use thiserror::Error;

use crate::config::ServiceConfig;

/// Name of the multipart field carrying the spreadsheet.
pub const FILE_FIELD: &str = "file";

/// Reasons an upload is rejected before conversion starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The body has no `file` field.
    #[error("No file uploaded")]
    MissingFile,
    /// The `file` field has an empty filename.
    #[error("No file selected")]
    EmptyFilename,
    /// The filename extension is not allowed.
    #[error("Invalid file type. Please upload an Excel file (.xlsx or .xls)")]
    InvalidFileType,
    /// The multipart body could not be read.
    #[error("Malformed upload: {0}")]
    Malformed(String),
}

/// A spreadsheet received from the client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The filename as sent by the client.
    pub filename: String,
    /// The file contents.
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Reads the `file` field from a multipart body and validates its name.
    ///
    /// Other fields are skipped.
    pub async fn from_multipart(
        multipart: &mut Multipart,
        config: &ServiceConfig,
    ) -> Result<Self, UploadError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| UploadError::Malformed(e.body_text()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            if filename.is_empty() {
                return Err(UploadError::EmptyFilename);
            }
            if !config.is_allowed_file(&filename) {
                return Err(UploadError::InvalidFileType);
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| UploadError::Malformed(e.body_text()))?;
            return Ok(Self { filename, bytes });
        }
        Err(UploadError::MissingFile)
    }

    /// Returns the lowercase extension of the client filename.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    /// Returns the name to store the upload under: a sanitized stem
    /// prefixed with `id`, keeping the original extension so the workbook
    /// format can still be detected.
    pub fn storage_name(&self, id: &str) -> String {
        let stem = self
            .filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.filename);
        match self.extension() {
            Some(ext) => format!("{}_{}.{}", id, secure_filename(stem), ext),
            None => format!("{}_{}", id, secure_filename(stem)),
        }
    }
}

/// Reduces a client-supplied filename to a safe single path component.
///
/// Path separators and whitespace become underscores, anything other than
/// ASCII letters, digits, `.`, `_` and `-` is dropped, and leading dots and
/// underscores are removed. Falls back to `upload` if nothing is left.
///
/// # Example
///
/// ```
/// use timesheet_report::api::secure_filename;
///
/// assert_eq!(secure_filename("My Report (3).xlsx"), "My_Report_3.xlsx");
/// assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
/// ```
pub fn secure_filename(filename: &str) -> String {
    let mapped: String = filename
        .chars()
        .filter_map(|c| match c {
            '/' | '\\' => Some('_'),
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
            _ => None,
        })
        .collect();

    // Collapse the runs left behind by separators and dropped characters.
    let mut collapsed = String::with_capacity(mapped.len());
    for c in mapped.chars() {
        if c == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(c);
    }

    let trimmed = collapsed.trim_start_matches(['.', '_']).trim_end_matches('_');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Returns true if `name` can be joined onto a directory without escaping it.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && secure_filename(name) == name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_filename_keeps_plain_names() {
        assert_eq!(secure_filename("timesheets.xlsx"), "timesheets.xlsx");
        assert_eq!(secure_filename("report-2024_01.xls"), "report-2024_01.xls");
    }

    #[test]
    fn test_secure_filename_replaces_whitespace() {
        assert_eq!(
            secure_filename("Timesheets Status Report.xlsx"),
            "Timesheets_Status_Report.xlsx"
        );
    }

    #[test]
    fn test_secure_filename_strips_traversal() {
        assert_eq!(secure_filename("..\\..\\windows\\x.xlsx"), "windows_x.xlsx");
        assert_eq!(secure_filename("/abs/path.xlsx"), "abs_path.xlsx");
    }

    #[test]
    fn test_secure_filename_falls_back_when_empty() {
        assert_eq!(secure_filename("..."), "upload");
        assert_eq!(secure_filename("ü"), "upload");
    }

    #[test]
    fn test_is_safe_file_name() {
        assert!(is_safe_file_name("timesheet_summary_20240101_120000_ab12cd34.xlsx"));
        assert!(!is_safe_file_name("../secret.xlsx"));
        assert!(!is_safe_file_name("a/b.xlsx"));
        assert!(!is_safe_file_name(".hidden"));
        assert!(!is_safe_file_name(""));
    }

    #[test]
    fn test_storage_name_keeps_extension() {
        let upload = UploadedFile {
            filename: "Timesheets Report (15).XLSX".to_string(),
            bytes: Bytes::new(),
        };
        assert_eq!(upload.extension().as_deref(), Some("xlsx"));
        assert_eq!(upload.storage_name("abc"), "abc_Timesheets_Report_15.xlsx");
    }

    #[test]
    fn test_storage_name_for_unrepresentable_stem() {
        let upload = UploadedFile {
            filename: "ü.xls".to_string(),
            bytes: Bytes::new(),
        };
        assert_eq!(upload.storage_name("abc"), "abc_upload.xls");
    }

    #[test]
    fn test_upload_error_messages() {
        assert_eq!(UploadError::MissingFile.to_string(), "No file uploaded");
        assert_eq!(UploadError::EmptyFilename.to_string(), "No file selected");
        assert_eq!(
            UploadError::InvalidFileType.to_string(),
            "Invalid file type. Please upload an Excel file (.xlsx or .xls)"
        );
    }
}
