//! Service Ports
//!
//! Abstract interfaces for external services.

mod meter_reader;

pub use meter_reader::*;
