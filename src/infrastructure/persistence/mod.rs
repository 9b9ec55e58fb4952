//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - slug → URL mapping storage

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
