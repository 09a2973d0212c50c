//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod measure_service;

pub use measure_service::{MeasureService, UploadSummary};
