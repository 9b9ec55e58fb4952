//! HTTP middleware for request processing.
//!
//! Provides cross-origin headers and request tracing.

pub mod cors;
pub mod tracing;
