//! HTTP Error Mapping
//!
//! Renders domain error kinds as the service's error body
//! (`error_code` / `error_description`).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use leitura::DomainError;

/// Wrapper that turns a DomainError into an HTTP response
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            DomainError::DuplicateReading { .. } => StatusCode::CONFLICT,
            DomainError::ExtractionFailed(_) => StatusCode::BAD_GATEWAY,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::AlreadyConfirmed { .. } => StatusCode::CONFLICT,
            DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match &self.0 {
            DomainError::InvalidInput { .. } => "INVALID_DATA",
            DomainError::DuplicateReading { .. } => "DOUBLE_REPORT",
            DomainError::ExtractionFailed(_) => "EXTRACTION_FAILED",
            DomainError::NotFound { .. } => "MEASURE_NOT_FOUND",
            DomainError::AlreadyConfirmed { .. } => "CONFIRMATION_DUPLICATE",
            DomainError::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        }

        let body = ErrorResponse {
            error_code: self.error_code().to_string(),
            error_description: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
