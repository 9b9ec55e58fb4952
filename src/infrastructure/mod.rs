//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`credentials`] - store credential file loading

pub mod credentials;
pub mod persistence;
