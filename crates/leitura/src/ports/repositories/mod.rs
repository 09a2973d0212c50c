//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod measure_repository;

pub use measure_repository::*;
