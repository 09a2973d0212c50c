//! PostgreSQL implementation of MeasureRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use leitura::{DomainError, Measure, MeasureRepository, MeasureType, NewMeasure};

/// PostgreSQL implementation of MeasureRepository
pub struct PgMeasureRepository {
    pool: PgPool,
}

impl PgMeasureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct MeasureRow {
    measure_uuid: Uuid,
    customer_code: String,
    measure_type: String,
    measure_datetime: DateTime<Utc>,
    image_url: String,
    measure_value: f64,
    has_confirmed: bool,
}

impl TryFrom<MeasureRow> for Measure {
    type Error = DomainError;

    fn try_from(row: MeasureRow) -> Result<Self, Self::Error> {
        let measure_type =
            MeasureType::from_str(&row.measure_type).map_err(DomainError::Repository)?;

        Ok(Self {
            measure_uuid: row.measure_uuid,
            customer_code: row.customer_code,
            measure_type,
            measure_datetime: row.measure_datetime,
            image_url: row.image_url,
            measure_value: row.measure_value,
            has_confirmed: row.has_confirmed,
        })
    }
}

#[async_trait]
impl MeasureRepository for PgMeasureRepository {
    async fn create(&self, new: NewMeasure) -> Result<Measure, DomainError> {
        let measure = Measure::new(new);

        let row = sqlx::query_as::<_, MeasureRow>(
            r#"
            INSERT INTO measures
                (measure_uuid, customer_code, measure_type, measure_datetime, image_url, measure_value)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(measure.measure_uuid)
        .bind(&measure.customer_code)
        .bind(measure.measure_type.to_string())
        .bind(measure.measure_datetime)
        .bind(&measure.image_url)
        .bind(measure.measure_value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn find_in_month(
        &self,
        customer_code: &str,
        measure_type: MeasureType,
        reference: DateTime<Utc>,
    ) -> Result<Option<Measure>, DomainError> {
        // Earliest inserted wins when several same-month rows exist
        let row = sqlx::query_as::<_, MeasureRow>(
            r#"
            SELECT * FROM measures
            WHERE customer_code = $1
              AND measure_type = $2
              AND date_trunc('month', measure_datetime AT TIME ZONE 'UTC')
                  = date_trunc('month', $3 AT TIME ZONE 'UTC')
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(customer_code)
        .bind(measure_type.to_string())
        .bind(reference)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_by_customer(
        &self,
        customer_code: &str,
        measure_type: Option<MeasureType>,
    ) -> Result<Vec<Measure>, DomainError> {
        let rows = sqlx::query_as::<_, MeasureRow>(
            r#"
            SELECT * FROM measures
            WHERE customer_code = $1
              AND ($2::text IS NULL OR measure_type = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(customer_code)
        .bind(measure_type.map(|t| t.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn confirm(&self, measure_uuid: Uuid, confirmed_value: f64) -> Result<(), DomainError> {
        // Row lock scoped around check-then-set
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = sqlx::query_as::<_, MeasureRow>(
            "SELECT * FROM measures WHERE measure_uuid = $1 FOR UPDATE",
        )
        .bind(measure_uuid)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let Some(row) = row else {
            return Err(DomainError::NotFound { id: measure_uuid });
        };

        if row.has_confirmed {
            return Err(DomainError::AlreadyConfirmed { id: measure_uuid });
        }

        sqlx::query(
            "UPDATE measures SET measure_value = $2, has_confirmed = TRUE WHERE measure_uuid = $1",
        )
        .bind(measure_uuid)
        .bind(confirmed_value)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}
