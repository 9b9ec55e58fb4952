//! Short link creation and resolution.

use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, INVALID_URL_MESSAGE, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
use crate::utils::slug::{DEFAULT_SLUG_LENGTH, generate_slug, is_slug};
use crate::utils::url_validator::storable_url;

/// Default number of slug candidates tried before giving up.
pub const DEFAULT_COLLISION_RETRIES: usize = 10;

/// A freshly stored mapping together with its public short URL.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub mapping: UrlMapping,
    pub short_url: String,
}

/// Service for creating and resolving short links.
///
/// Owns its store dependency; constructed once at startup and shared by all
/// handlers.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    base_url: String,
    slug_length: usize,
    collision_retries: usize,
}

impl MappingService {
    /// Creates a service with the default slug length and collision policy.
    pub fn new(repository: Arc<dyn MappingRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            slug_length: DEFAULT_SLUG_LENGTH,
            collision_retries: DEFAULT_COLLISION_RETRIES,
        }
    }

    pub fn with_slug_length(mut self, slug_length: usize) -> Self {
        self.slug_length = slug_length;
        self
    }

    /// Sets how many slug candidates are checked against the store.
    ///
    /// `0` skips the check and writes the first candidate, overwriting any
    /// existing mapping with the same slug.
    pub fn with_collision_retries(mut self, collision_retries: usize) -> Self {
        self.collision_retries = collision_retries;
        self
    }

    /// Validates `long_url`, allocates a slug and stores the mapping.
    ///
    /// The long URL is stored verbatim, unless it contains a NUL byte, in
    /// which case its percent-encoded form is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not absolute; nothing is
    /// written in that case.
    /// Returns [`AppError::Internal`] on store errors or when every slug
    /// candidate collides.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        let Some(long_url) = storable_url(long_url) else {
            return Err(AppError::bad_request(INVALID_URL_MESSAGE));
        };

        let slug = self.allocate_slug().await?;

        let mapping = self
            .repository
            .put(NewMapping {
                slug,
                long_url: long_url.into_owned(),
            })
            .await?;

        let short_url = self.short_url(&mapping.slug);
        tracing::info!("URL shortened: {} -> {}", mapping.long_url, short_url);

        Ok(ShortenedUrl { mapping, short_url })
    }

    /// Looks up the mapping for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, slug: &str) -> Result<UrlMapping, AppError> {
        if !is_slug(slug) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        self.repository
            .get(slug)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Builds the public short URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    /// Returns the number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Picks a slug that is not yet stored, regenerating on a hit.
    async fn allocate_slug(&self) -> Result<String, AppError> {
        if self.collision_retries == 0 {
            return Ok(generate_slug(self.slug_length));
        }

        for _ in 0..self.collision_retries {
            let slug = generate_slug(self.slug_length);

            if self.repository.get(&slug).await?.is_none() {
                return Ok(slug);
            }

            tracing::warn!("Slug collision on {}, regenerating", slug);
        }

        tracing::error!(
            "Failed to allocate a free slug after {} attempts",
            self.collision_retries
        );
        Err(AppError::internal(SERVER_ERROR_MESSAGE))
    }
}
