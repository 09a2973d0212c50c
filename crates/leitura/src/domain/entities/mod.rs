//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Measure: one recorded utility reading with its confirmation state

mod measure;

pub use measure::*;
