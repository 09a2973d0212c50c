//! PostgreSQL Repository Implementations

mod measure_repository;

pub use measure_repository::PgMeasureRepository;
