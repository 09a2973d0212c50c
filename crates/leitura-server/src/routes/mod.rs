//! Leitura API Routes
//!
//! - POST /measures/upload - record a reading from a meter photo
//! - GET /measures/:customer_code/list - list a customer's readings
//! - PATCH /measures/confirm - confirm a reading with its final value

pub mod measure;
pub mod swagger;
