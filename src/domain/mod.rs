//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - core data structures
//! - [`repositories`] - data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
