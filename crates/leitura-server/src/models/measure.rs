//! Measure API models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use leitura::Measure;

/// Upload a new meter reading
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadMeasureRequest {
    /// Base64-encoded meter photo
    pub image: String,
    pub customer_code: String,
    /// RFC 3339 timestamp of when the reading was taken
    pub measure_datetime: String,
    /// "WATER" or "GAS" (case-sensitive)
    pub measure_type: String,
}

/// Summary returned after a successful upload
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadMeasureResponse {
    pub image_url: String,
    pub measure_value: f64,
    pub measure_uuid: Uuid,
}

/// One stored measure
#[derive(Debug, Serialize, ToSchema)]
pub struct MeasureResponse {
    pub measure_uuid: Uuid,
    pub measure_datetime: DateTime<Utc>,
    pub measure_type: String,
    pub image_url: String,
    pub measure_value: f64,
    pub has_confirmed: bool,
}

impl From<Measure> for MeasureResponse {
    fn from(measure: Measure) -> Self {
        Self {
            measure_uuid: measure.measure_uuid,
            measure_datetime: measure.measure_datetime,
            measure_type: measure.measure_type.to_string(),
            image_url: measure.image_url,
            measure_value: measure.measure_value,
            has_confirmed: measure.has_confirmed,
        }
    }
}

/// Measures recorded for one customer
#[derive(Debug, Serialize, ToSchema)]
pub struct ListMeasuresResponse {
    pub customer_code: String,
    pub measures: Vec<MeasureResponse>,
}

/// Query filter for the list endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMeasuresQuery {
    /// Optional type filter, matched case-insensitively
    pub measure_type: Option<String>,
}

/// Confirm a measure with its final value
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfirmMeasureRequest {
    pub measure_uuid: String,
    pub confirmed_value: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfirmMeasureResponse {
    pub success: bool,
}

/// Error body shared by all endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_description: String,
}
