//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for slug → URL mappings.
///
/// Uses bound parameters for every query.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn put(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        // Overwrites on slug conflict and assigns a fresh server timestamp.
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (slug, long_url)
            VALUES ($1, $2)
            ON CONFLICT (slug) DO UPDATE
                SET long_url = EXCLUDED.long_url,
                    created_at = now()
            RETURNING slug, long_url, created_at
            "#,
        )
        .bind(&new_mapping.slug)
        .bind(&new_mapping.long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn get(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT slug, long_url, created_at FROM url_mappings WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
