//! Upload Request Validation
//!
//! The transport layer enforces the core's precondition contract
//! before any service call is made.

use base64::Engine;
use chrono::{DateTime, Utc};
use std::str::FromStr;

use leitura::{DomainError, MeasureType};

const MAX_CUSTOMER_CODE_LEN: usize = 64;

pub fn validate_image(image: &str) -> Result<(), DomainError> {
    let trimmed = image.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input(
            "image",
            "must be a non-empty base64 string",
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(trimmed)
        .map(|_| ())
        .map_err(|_| DomainError::invalid_input("image", "must be a valid base64 string"))
}

pub fn validate_customer_code(customer_code: &str) -> Result<(), DomainError> {
    if customer_code.is_empty() {
        return Err(DomainError::invalid_input(
            "customer_code",
            "must not be empty",
        ));
    }
    if customer_code.len() > MAX_CUSTOMER_CODE_LEN {
        return Err(DomainError::invalid_input(
            "customer_code",
            format!("must be at most {MAX_CUSTOMER_CODE_LEN} characters"),
        ));
    }
    if !customer_code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::invalid_input(
            "customer_code",
            "must be alphanumeric",
        ));
    }
    Ok(())
}

pub fn parse_measure_datetime(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            DomainError::invalid_input(
                "measure_datetime",
                "must be a valid RFC 3339 datetime string",
            )
        })
}

/// Upload boundary: exactly "WATER" or "GAS"
pub fn parse_measure_type(raw: &str) -> Result<MeasureType, DomainError> {
    MeasureType::from_str(raw)
        .map_err(|_| DomainError::invalid_input("measure_type", "must be WATER or GAS"))
}

/// List query boundary: case-insensitive
pub fn parse_measure_type_filter(raw: &str) -> Result<MeasureType, DomainError> {
    MeasureType::from_query(raw)
        .map_err(|_| DomainError::invalid_input("measure_type", "must be WATER or GAS"))
}
