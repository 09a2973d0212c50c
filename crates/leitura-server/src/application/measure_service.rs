//! Measure Application Service (Use Case)
//!
//! Orchestrates the measure lifecycle: upload with monthly duplicate
//! detection, customer listing, and one-shot confirmation.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use leitura::{DomainError, Measure, MeasureRepository, MeasureType, MeterReader, NewMeasure};

/// Summary returned by a successful upload. The full record (type,
/// confirmation flag) is not part of the upload contract.
#[derive(Debug, Clone)]
pub struct UploadSummary {
    pub image_url: String,
    pub measure_value: f64,
    pub measure_uuid: Uuid,
}

/// Application service for measure operations
pub struct MeasureService {
    repo: Arc<dyn MeasureRepository>,
    reader: Arc<dyn MeterReader>,
    /// Serializes check-then-create so two concurrent uploads for the
    /// same customer/type/month cannot both pass the duplicate check.
    upload_lock: Mutex<()>,
}

impl MeasureService {
    pub fn new(repo: Arc<dyn MeasureRepository>, reader: Arc<dyn MeterReader>) -> Self {
        Self {
            repo,
            reader,
            upload_lock: Mutex::new(()),
        }
    }

    /// Record a new reading from a meter photo.
    ///
    /// A same-month duplicate is rejected before the extraction
    /// round-trip is paid; the check is repeated under the upload lock
    /// right before `create`, so the slow external call stays outside
    /// the critical section. Zero records are created on any failure.
    pub async fn upload(
        &self,
        customer_code: String,
        measure_type: MeasureType,
        measure_datetime: DateTime<Utc>,
        image_base64: &str,
    ) -> Result<UploadSummary, DomainError> {
        if self
            .repo
            .find_in_month(&customer_code, measure_type, measure_datetime)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateReading {
                customer_code,
                measure_type,
            });
        }

        let reading = self.reader.read_meter(image_base64).await?;

        let _guard = self.upload_lock.lock().await;
        if self
            .repo
            .find_in_month(&customer_code, measure_type, measure_datetime)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateReading {
                customer_code,
                measure_type,
            });
        }

        let measure = self
            .repo
            .create(NewMeasure {
                customer_code,
                measure_type,
                measure_datetime,
                image_url: reading.image_url,
                measure_value: reading.measure_value,
            })
            .await?;

        tracing::info!(
            "Recorded {} measure {} for customer {}",
            measure.measure_type,
            measure.measure_uuid,
            measure.customer_code
        );

        Ok(UploadSummary {
            image_url: measure.image_url,
            measure_value: measure.measure_value,
            measure_uuid: measure.measure_uuid,
        })
    }

    /// List all measures for a customer, optionally filtered by type.
    /// No matches is an empty list, never an error.
    pub async fn list(
        &self,
        customer_code: &str,
        measure_type: Option<MeasureType>,
    ) -> Result<Vec<Measure>, DomainError> {
        self.repo.list_by_customer(customer_code, measure_type).await
    }

    /// Confirm a measure with its final value. Propagates `NotFound`
    /// and `AlreadyConfirmed` unchanged.
    pub async fn confirm(&self, measure_uuid: Uuid, confirmed_value: f64) -> Result<(), DomainError> {
        self.repo.confirm(measure_uuid, confirmed_value).await?;

        tracing::info!("Confirmed measure {}", measure_uuid);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::adapters::InMemoryMeasureRepository;
    use leitura::ExtractedReading;

    /// Reader that returns a fixed reading and counts invocations
    struct FixedMeterReader {
        image_url: String,
        measure_value: f64,
        calls: AtomicUsize,
    }

    impl FixedMeterReader {
        fn new(image_url: &str, measure_value: f64) -> Self {
            Self {
                image_url: image_url.to_string(),
                measure_value,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MeterReader for FixedMeterReader {
        async fn read_meter(&self, _image_base64: &str) -> Result<ExtractedReading, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ExtractedReading {
                image_url: self.image_url.clone(),
                measure_value: self.measure_value,
            })
        }
    }

    struct FailingMeterReader;

    #[async_trait]
    impl MeterReader for FailingMeterReader {
        async fn read_meter(&self, _image_base64: &str) -> Result<ExtractedReading, DomainError> {
            Err(DomainError::ExtractionFailed("Gemini unavailable".to_string()))
        }
    }

    fn service_with(reader: Arc<dyn MeterReader>) -> MeasureService {
        MeasureService::new(Arc::new(InMemoryMeasureRepository::new()), reader)
    }

    fn dt(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid test datetime")
    }

    #[tokio::test]
    async fn test_upload_returns_summary_projection() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        let summary = service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("upload succeeds");

        assert_eq!(summary.image_url, "r1");
        assert_eq!(summary.measure_value, 100.0);
    }

    #[tokio::test]
    async fn test_second_upload_same_month_rejected_before_extraction() {
        let reader = Arc::new(FixedMeterReader::new("r1", 100.0));
        let service = service_with(reader.clone());

        service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("first upload succeeds");
        assert_eq!(reader.call_count(), 1);

        let err = service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-20T00:00:00Z"),
                "base64image",
            )
            .await
            .expect_err("same month must be rejected");

        assert!(matches!(err, DomainError::DuplicateReading { .. }));
        // The duplicate check fires before the extractor is consulted
        assert_eq!(reader.call_count(), 1);
    }

    #[tokio::test]
    async fn test_upload_next_month_creates_second_record() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("january upload succeeds");
        service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-02-01T00:00:00Z"),
                "base64image",
            )
            .await
            .expect("february upload succeeds");

        let measures = service.list("C1", None).await.expect("list succeeds");
        assert_eq!(measures.len(), 2);
    }

    #[tokio::test]
    async fn test_same_month_different_type_is_allowed() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("water upload succeeds");
        service
            .upload(
                "C1".to_string(),
                MeasureType::Gas,
                dt("2024-01-20T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("gas upload in the same month succeeds");
    }

    #[tokio::test]
    async fn test_extraction_failure_creates_no_record() {
        let service = service_with(Arc::new(FailingMeterReader));

        let err = service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect_err("extraction failure propagates");

        assert!(matches!(err, DomainError::ExtractionFailed(_)));
        assert!(service.list("C1", None).await.expect("list succeeds").is_empty());
    }

    #[tokio::test]
    async fn test_confirm_overwrites_value_exactly_once() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        let summary = service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("upload succeeds");

        service
            .confirm(summary.measure_uuid, 150.0)
            .await
            .expect("first confirmation succeeds");

        let err = service
            .confirm(summary.measure_uuid, 200.0)
            .await
            .expect_err("second confirmation must fail");
        assert!(matches!(err, DomainError::AlreadyConfirmed { .. }));

        let measures = service.list("C1", None).await.expect("list succeeds");
        assert_eq!(measures[0].measure_value, 150.0);
        assert!(measures[0].has_confirmed);
    }

    #[tokio::test]
    async fn test_confirm_unknown_id_is_not_found() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        let err = service
            .confirm(Uuid::new_v4(), 150.0)
            .await
            .expect_err("unknown id must fail");

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_unknown_customer_is_empty_not_error() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        let measures = service.list("NOBODY", None).await.expect("list succeeds");
        assert!(measures.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let service = service_with(Arc::new(FixedMeterReader::new("r1", 100.0)));

        service
            .upload(
                "C1".to_string(),
                MeasureType::Water,
                dt("2024-01-15T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("water upload succeeds");
        service
            .upload(
                "C1".to_string(),
                MeasureType::Gas,
                dt("2024-01-16T10:00:00Z"),
                "base64image",
            )
            .await
            .expect("gas upload succeeds");

        let water = service
            .list("C1", Some(MeasureType::Water))
            .await
            .expect("list succeeds");
        assert_eq!(water.len(), 1);
        assert_eq!(water[0].measure_type, MeasureType::Water);

        let all = service.list("C1", None).await.expect("list succeeds");
        assert_eq!(all.len(), 2);
    }
}
