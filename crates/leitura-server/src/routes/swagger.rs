//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ConfirmMeasureRequest, ConfirmMeasureResponse, ErrorResponse, ListMeasuresResponse,
    MeasureResponse, UploadMeasureRequest, UploadMeasureResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::measure::upload_measure,
        super::measure::list_measures,
        super::measure::confirm_measure,
    ),
    info(
        title = "Leitura API",
        version = "0.1.0",
        description = "Utility meter reading service - upload a meter photo, list and confirm customer measures.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Measures", description = "Meter reading lifecycle"),
    ),
    components(
        schemas(
            UploadMeasureRequest,
            UploadMeasureResponse,
            MeasureResponse,
            ListMeasuresResponse,
            ConfirmMeasureRequest,
            ConfirmMeasureResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
