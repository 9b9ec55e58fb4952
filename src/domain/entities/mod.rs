//! Core domain entities.
//!
//! - [`UrlMapping`] - a stored slug → long URL mapping
//! - [`NewMapping`] - input for writing a mapping

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
