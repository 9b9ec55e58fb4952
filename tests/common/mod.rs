#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use linkslug::application::services::MappingService;
use linkslug::domain::entities::{NewMapping, UrlMapping};
use linkslug::domain::repositories::MappingRepository;
use linkslug::error::{AppError, SERVER_ERROR_MESSAGE};
use linkslug::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://localhost:3000";

/// In-process mapping store for handler tests.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    mappings: Mutex<HashMap<String, UrlMapping>>,
    puts: Mutex<usize>,
    counts: Mutex<usize>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, slug: &str, long_url: &str) {
        self.mappings.lock().unwrap().insert(
            slug.to_string(),
            UrlMapping::new(slug.to_string(), long_url.to_string(), Utc::now()),
        );
    }

    pub fn len(&self) -> usize {
        self.mappings.lock().unwrap().len()
    }

    pub fn put_count(&self) -> usize {
        *self.puts.lock().unwrap()
    }

    pub fn count_calls(&self) -> usize {
        *self.counts.lock().unwrap()
    }

    pub fn snapshot(&self, slug: &str) -> Option<UrlMapping> {
        self.mappings.lock().unwrap().get(slug).cloned()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn put(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let mapping = UrlMapping::new(new_mapping.slug, new_mapping.long_url, Utc::now());
        self.mappings
            .lock()
            .unwrap()
            .insert(mapping.slug.clone(), mapping.clone());
        *self.puts.lock().unwrap() += 1;
        Ok(mapping)
    }

    async fn get(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.mappings.lock().unwrap().get(slug).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        *self.counts.lock().unwrap() += 1;
        Ok(self.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store that fails every call, as an unreachable database would.
pub struct FailingMappingRepository;

#[async_trait]
impl MappingRepository for FailingMappingRepository {
    async fn put(&self, _new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::internal(SERVER_ERROR_MESSAGE))
    }

    async fn get(&self, _slug: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::internal(SERVER_ERROR_MESSAGE))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal(SERVER_ERROR_MESSAGE))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal(SERVER_ERROR_MESSAGE))
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let service = MappingService::new(repo.clone(), BASE_URL);

    (AppState::new(Arc::new(service)), repo)
}

pub fn create_failing_state() -> AppState {
    let service = MappingService::new(Arc::new(FailingMappingRepository), BASE_URL);
    AppState::new(Arc::new(service))
}

/// Extracts the slug from a returned short URL.
pub fn slug_of(short_url: &str) -> String {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .expect("short URL should start with the base URL")
        .to_string()
}
