//! Measure Routes - Meter reading lifecycle
//!
//! HTTP handlers that delegate to MeasureService for business logic.
//! Input validation happens here, before the core is invoked.

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    ConfirmMeasureRequest, ConfirmMeasureResponse, ErrorResponse, ListMeasuresQuery,
    ListMeasuresResponse, UploadMeasureRequest, UploadMeasureResponse,
};
use crate::validation;
use crate::AppState;
use leitura::DomainError;

/// Upload a meter reading
#[utoipa::path(
    post,
    path = "/measures/upload",
    request_body = UploadMeasureRequest,
    responses(
        (status = 200, description = "Reading recorded", body = UploadMeasureResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
        (status = 409, description = "A reading for this month already exists", body = ErrorResponse),
        (status = 502, description = "Reading extraction failed", body = ErrorResponse)
    ),
    tag = "Measures"
)]
pub async fn upload_measure(
    State(state): State<AppState>,
    Json(payload): Json<UploadMeasureRequest>,
) -> Result<Json<UploadMeasureResponse>, ApiError> {
    validation::validate_image(&payload.image)?;
    validation::validate_customer_code(&payload.customer_code)?;
    let measure_datetime = validation::parse_measure_datetime(&payload.measure_datetime)?;
    let measure_type = validation::parse_measure_type(&payload.measure_type)?;

    let summary = state
        .measure_service
        .upload(
            payload.customer_code,
            measure_type,
            measure_datetime,
            &payload.image,
        )
        .await?;

    Ok(Json(UploadMeasureResponse {
        image_url: summary.image_url,
        measure_value: summary.measure_value,
        measure_uuid: summary.measure_uuid,
    }))
}

/// List a customer's readings
#[utoipa::path(
    get,
    path = "/measures/{customer_code}/list",
    params(
        ("customer_code" = String, Path, description = "Customer code"),
        ListMeasuresQuery
    ),
    responses(
        (status = 200, description = "Customer readings (possibly empty)", body = ListMeasuresResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse)
    ),
    tag = "Measures"
)]
pub async fn list_measures(
    State(state): State<AppState>,
    Path(customer_code): Path<String>,
    Query(query): Query<ListMeasuresQuery>,
) -> Result<Json<ListMeasuresResponse>, ApiError> {
    validation::validate_customer_code(&customer_code)?;
    let measure_type = query
        .measure_type
        .as_deref()
        .map(validation::parse_measure_type_filter)
        .transpose()?;

    let measures = state
        .measure_service
        .list(&customer_code, measure_type)
        .await?;

    Ok(Json(ListMeasuresResponse {
        customer_code,
        measures: measures.into_iter().map(Into::into).collect(),
    }))
}

/// Confirm a reading with its final value
#[utoipa::path(
    patch,
    path = "/measures/confirm",
    request_body = ConfirmMeasureRequest,
    responses(
        (status = 200, description = "Reading confirmed", body = ConfirmMeasureResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
        (status = 404, description = "No reading with that id", body = ErrorResponse),
        (status = 409, description = "Reading was already confirmed", body = ErrorResponse)
    ),
    tag = "Measures"
)]
pub async fn confirm_measure(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmMeasureRequest>,
) -> Result<Json<ConfirmMeasureResponse>, ApiError> {
    let measure_uuid = Uuid::parse_str(&payload.measure_uuid)
        .map_err(|_| DomainError::invalid_input("measure_uuid", "must be a valid UUID"))?;

    state
        .measure_service
        .confirm(measure_uuid, payload.confirmed_value)
        .await?;

    Ok(Json(ConfirmMeasureResponse { success: true }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/measures/upload", post(upload_measure))
        .route("/measures/:customer_code/list", get(list_measures))
        .route("/measures/confirm", patch(confirm_measure))
}
