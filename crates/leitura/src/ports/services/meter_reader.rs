//! Meter Reader Port
//!
//! Abstract interface for the vision capability that turns a meter
//! photo into a numeric reading plus a storage reference.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Result of reading a meter image
#[derive(Debug, Clone)]
pub struct ExtractedReading {
    /// Reference to the stored source image
    pub image_url: String,
    /// Numeric value shown on the meter
    pub measure_value: f64,
}

/// Service interface for extracting a reading from a meter photo
#[async_trait]
pub trait MeterReader: Send + Sync {
    /// Extract the numeric reading from a base64-encoded meter photo.
    /// Any failure (bad format, API error, no numeric value found)
    /// surfaces as `ExtractionFailed`.
    async fn read_meter(&self, image_base64: &str) -> Result<ExtractedReading, DomainError>;
}
