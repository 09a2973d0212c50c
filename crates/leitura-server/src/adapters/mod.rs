//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod gemini;
pub mod memory;
pub mod postgres;

// Re-exports
pub use gemini::GeminiMeterReader;
pub use memory::InMemoryMeasureRepository;
pub use postgres::PgMeasureRepository;
