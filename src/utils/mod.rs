//! Helper functions used across the application.
//!
//! - [`slug`] - slug generation and shape checks
//! - [`url_validator`] - absolute URL validation

pub mod slug;
pub mod url_validator;
