//! Value Objects
//!
//! Immutable value types shared across the domain.

mod measure_type;

pub use measure_type::*;
