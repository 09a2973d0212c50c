//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_objects::MeasureType;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("A {measure_type} reading for customer {customer_code} already exists this month")]
    DuplicateReading {
        customer_code: String,
        measure_type: MeasureType,
    },

    #[error("Reading extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Measure not found: {id}")]
    NotFound { id: Uuid },

    #[error("Measure already confirmed: {id}")]
    AlreadyConfirmed { id: Uuid },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn invalid_input<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
