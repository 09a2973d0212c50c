//! Measure - Recorded utility reading
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::MeasureType;

/// Measure - one recorded meter reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measure {
    pub measure_uuid: Uuid,
    pub customer_code: String,
    pub measure_type: MeasureType,
    /// When the reading was taken, not when it was recorded
    pub measure_datetime: DateTime<Utc>,
    /// Reference to the stored source image; the image itself is owned
    /// by an external storage collaborator
    pub image_url: String,
    pub measure_value: f64,
    /// Monotonic: transitions false -> true exactly once
    pub has_confirmed: bool,
}

/// Fields required to record a new reading. The id and confirmation
/// state are owned by the store.
#[derive(Debug, Clone)]
pub struct NewMeasure {
    pub customer_code: String,
    pub measure_type: MeasureType,
    pub measure_datetime: DateTime<Utc>,
    pub image_url: String,
    pub measure_value: f64,
}

impl Measure {
    /// Create a new unconfirmed Measure with a generated ID
    pub fn new(new: NewMeasure) -> Self {
        Self {
            measure_uuid: Uuid::new_v4(),
            customer_code: new.customer_code,
            measure_type: new.measure_type,
            measure_datetime: new.measure_datetime,
            image_url: new.image_url,
            measure_value: new.measure_value,
            has_confirmed: false,
        }
    }

    /// Whether this reading was taken in the same UTC calendar month as
    /// `reference` (first through last instant of the month)
    pub fn taken_in_month_of(&self, reference: DateTime<Utc>) -> bool {
        self.measure_datetime.year() == reference.year()
            && self.measure_datetime.month() == reference.month()
    }
}
