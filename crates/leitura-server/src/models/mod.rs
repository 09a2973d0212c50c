//! Leitura API Models
//!
//! Request/response DTOs for the HTTP layer. The wire format keeps the
//! original field names (measure_uuid, image_url, has_confirmed).

mod measure;

pub use measure::*;
