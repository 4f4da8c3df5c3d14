//! Response types for the report generator API.
//!
//! Every JSON response has the shape
//! `{"success": bool, "filename"?: string, "error"?: string}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::request::UploadError;

/// Message returned for failures the client cannot act on.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// JSON body returned by the upload endpoint (and errors on download).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Name of the generated report, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Human-readable error, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    /// A successful conversion that produced `filename`.
    pub fn converted(filename: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: Some(filename.into()),
            error: None,
        }
    }

    /// A failed request.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            error: Some(error.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub body: UploadResponse,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status and message.
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: UploadResponse::failed(error),
        }
    }

    /// A 500 response that does not leak details.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        if error.is_client_error() {
            Self::new(StatusCode::BAD_REQUEST, error.to_string())
        } else {
            Self::internal()
        }
    }
}

impl From<UploadError> for ApiErrorResponse {
    fn from(error: UploadError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization_omits_error() {
        let json = serde_json::to_string(&UploadResponse::converted("out.xlsx")).unwrap();
        assert_eq!(json, r#"{"success":true,"filename":"out.xlsx"}"#);
    }

    #[test]
    fn test_failure_serialization_omits_filename() {
        let json = serde_json::to_string(&UploadResponse::failed("bad")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"bad"}"#);
    }

    #[test]
    fn test_input_format_error_is_bad_request_with_message() {
        let response: ApiErrorResponse = EngineError::MalformedPeriod {
            value: "Jan 01 2024".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body.error.unwrap().contains("Jan 01 2024"));
    }

    #[test]
    fn test_no_matching_records_is_bad_request() {
        let response: ApiErrorResponse = EngineError::NoMatchingRecords {
            status: "Not Submitted".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body.error.as_deref(),
            Some("No 'Not Submitted' timesheets found.")
        );
    }

    #[test]
    fn test_output_error_is_generic_internal_error() {
        let response: ApiErrorResponse = EngineError::OutputWrite {
            path: "/srv/processed/x.xlsx".to_string(),
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body.error.as_deref(), Some(GENERIC_ERROR));
    }

    #[test]
    fn test_upload_error_is_bad_request() {
        let response: ApiErrorResponse = UploadError::InvalidFileType.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(!response.body.success);
    }
}
