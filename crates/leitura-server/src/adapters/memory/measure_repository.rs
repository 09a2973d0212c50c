//! In-memory implementation of MeasureRepository
//!
//! Authoritative single-process store backed by a Vec in insertion
//! order. A persistent backend drops in behind the same trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use leitura::{DomainError, Measure, MeasureRepository, MeasureType, NewMeasure};

/// In-memory measure ledger
#[derive(Default)]
pub struct InMemoryMeasureRepository {
    measures: RwLock<Vec<Measure>>,
}

impl InMemoryMeasureRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeasureRepository for InMemoryMeasureRepository {
    async fn create(&self, new: NewMeasure) -> Result<Measure, DomainError> {
        let measure = Measure::new(new);
        self.measures.write().await.push(measure.clone());
        Ok(measure)
    }

    async fn find_in_month(
        &self,
        customer_code: &str,
        measure_type: MeasureType,
        reference: DateTime<Utc>,
    ) -> Result<Option<Measure>, DomainError> {
        // Linear scan in insertion order: with several same-month
        // records (a misuse), the earliest inserted wins.
        let measures = self.measures.read().await;
        Ok(measures
            .iter()
            .find(|m| {
                m.customer_code == customer_code
                    && m.measure_type == measure_type
                    && m.taken_in_month_of(reference)
            })
            .cloned())
    }

    async fn list_by_customer(
        &self,
        customer_code: &str,
        measure_type: Option<MeasureType>,
    ) -> Result<Vec<Measure>, DomainError> {
        let measures = self.measures.read().await;
        Ok(measures
            .iter()
            .filter(|m| {
                m.customer_code == customer_code
                    && measure_type.map_or(true, |t| m.measure_type == t)
            })
            .cloned()
            .collect())
    }

    async fn confirm(&self, measure_uuid: Uuid, confirmed_value: f64) -> Result<(), DomainError> {
        // Check-then-set happens under the write lock, keeping the
        // transition atomic per record.
        let mut measures = self.measures.write().await;
        let measure = measures
            .iter_mut()
            .find(|m| m.measure_uuid == measure_uuid)
            .ok_or(DomainError::NotFound { id: measure_uuid })?;

        if measure.has_confirmed {
            return Err(DomainError::AlreadyConfirmed { id: measure_uuid });
        }

        measure.measure_value = confirmed_value;
        measure.has_confirmed = true;
        Ok(())
    }
}
