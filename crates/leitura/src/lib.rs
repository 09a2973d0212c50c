//! Leitura Domain Library
//!
//! Core domain types and interfaces for the Leitura meter reading service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Measure)
//!   - `value_objects/`: Immutable value types (MeasureType)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use leitura::domain::{Measure, MeasureType};
//! use leitura::ports::{MeasureRepository, MeterReader};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Measure, MeasureType, NewMeasure};
pub use ports::{ExtractedReading, MeasureRepository, MeterReader};
