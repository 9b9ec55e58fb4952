//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A stored slug → long URL mapping.
///
/// Mappings are immutable once written; `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(slug: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            long_url,
            created_at,
        }
    }
}

/// Input data for writing a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub slug: String,
    pub long_url: String,
}
