//! Measure Repository Port
//!
//! Abstract interface for the measure ledger. The store is deliberately
//! dumb: `create` performs no duplicate check, the once-per-month rule
//! belongs to the service layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{errors::DomainError, Measure, MeasureType, NewMeasure};

/// Repository interface for Measure entities
#[async_trait]
pub trait MeasureRepository: Send + Sync {
    /// Append a new unconfirmed measure with a fresh id and return it
    async fn create(&self, new: NewMeasure) -> Result<Measure, DomainError>;

    /// Find the measure for the customer/type pair whose reading time
    /// falls in the UTC calendar month containing `reference`, if any.
    /// Should several exist (a misuse, not a feature), the earliest
    /// inserted one is returned.
    async fn find_in_month(
        &self,
        customer_code: &str,
        measure_type: MeasureType,
        reference: DateTime<Utc>,
    ) -> Result<Option<Measure>, DomainError>;

    /// All measures for a customer in insertion order, optionally
    /// filtered by type. An empty result is valid output, not an error.
    async fn list_by_customer(
        &self,
        customer_code: &str,
        measure_type: Option<MeasureType>,
    ) -> Result<Vec<Measure>, DomainError>;

    /// Overwrite the value and mark the measure confirmed. This is the
    /// sole mutation path after creation.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyConfirmed`
    /// if the measure was confirmed before.
    async fn confirm(&self, measure_uuid: Uuid, confirmed_value: f64) -> Result<(), DomainError>;
}
