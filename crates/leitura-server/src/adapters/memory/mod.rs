//! In-Memory Repository Implementations

mod measure_repository;

pub use measure_repository::InMemoryMeasureRepository;
