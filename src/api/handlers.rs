//! HTTP request handlers for the report generator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::io::ErrorKind as IoErrorKind;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::convert::{convert_file, unique_output_name};

use super::request::{UploadedFile, is_safe_file_name};
use super::response::{ApiErrorResponse, UploadResponse};
use super::state::AppState;

/// MIME type of generated reports.
const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.service().max_upload_bytes;
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/download/:filename", get(download_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for POST /upload endpoint.
///
/// Accepts a multipart spreadsheet upload, converts it and returns the
/// name of the generated report.
async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing upload request");

    match process_upload(&state, multipart, correlation_id).await {
        Ok(filename) => (StatusCode::OK, Json(UploadResponse::converted(filename))).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn process_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
    correlation_id: Uuid,
) -> Result<String, ApiErrorResponse> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected non-multipart upload"
        );
        ApiErrorResponse::new(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let upload = UploadedFile::from_multipart(&mut multipart, state.service())
        .await
        .inspect_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Upload rejected");
        })?;

    let upload_path = state
        .service()
        .upload_dir
        .join(upload.storage_name(&correlation_id.simple().to_string()));
    tokio::fs::write(&upload_path, &upload.bytes)
        .await
        .map_err(|e| {
            error!(
                correlation_id = %correlation_id,
                path = %upload_path.display(),
                error = %e,
                "Failed to store upload"
            );
            ApiErrorResponse::internal()
        })?;

    let output_name = unique_output_name();
    let output_path = state.service().processed_dir.join(&output_name);
    let report_config = state.report().clone();
    let input_path = upload_path.clone();

    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        convert_file(&input_path, &output_path, &report_config)
    })
    .await;

    if let Err(e) = tokio::fs::remove_file(&upload_path).await {
        warn!(
            correlation_id = %correlation_id,
            path = %upload_path.display(),
            error = %e,
            "Failed to remove upload"
        );
    }

    match result {
        Ok(Ok(summary)) => {
            info!(
                correlation_id = %correlation_id,
                filename = %upload.filename,
                output = %output_name,
                employees = summary.employees,
                duration_us = start_time.elapsed().as_micros(),
                "Conversion completed successfully"
            );
            Ok(output_name)
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                kind = ?err.kind(),
                error = %err,
                "Conversion failed"
            );
            Err(err.into())
        }
        Err(join_error) => {
            error!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Conversion task aborted"
            );
            Err(ApiErrorResponse::internal())
        }
    }
}

/// Handler for GET /download/{filename} endpoint.
///
/// Serves a generated report as an attachment.
async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_safe_file_name(&filename) {
        warn!(filename = %filename, "Rejected unsafe download name");
        return ApiErrorResponse::new(StatusCode::BAD_REQUEST, "Invalid filename").into_response();
    }

    let path = state.service().processed_dir.join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            info!(filename = %filename, bytes = bytes.len(), "Serving report");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            ApiErrorResponse::new(StatusCode::NOT_FOUND, "File not found").into_response()
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read report");
            ApiErrorResponse::internal().into_response()
        }
    }
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
