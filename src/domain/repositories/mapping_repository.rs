//! Repository trait for the mapping store.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value access to stored mappings, keyed by slug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Writes a mapping keyed by its slug.
    ///
    /// An existing mapping with the same slug is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn put(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Looks up a mapping by exact slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn get(&self, slug: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips to the store.
    async fn ping(&self) -> Result<(), AppError>;
}
