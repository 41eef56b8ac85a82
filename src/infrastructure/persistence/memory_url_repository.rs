//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local repository backed by two `DashMap` indexes.
///
/// Mirrors the constraints of the PostgreSQL schema: both the short code and
/// the original URL are unique, and short codes must be positive. Contents
/// are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    by_short_url: DashMap<i64, UrlRecord>,
    by_original_url: DashMap<String, UrlRecord>,
    // Serializes short code allocation in `find_or_create`.
    allocation: Mutex<()>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let NewUrlRecord {
            original_url,
            short_url,
        } = new_record;

        if short_url <= 0 {
            return Err(AppError::internal(
                "Check constraint violation",
                json!({ "short_url": short_url }),
            ));
        }

        // Lock order is always original URL, then short code.
        let Entry::Vacant(url_slot) = self.by_original_url.entry(original_url.clone()) else {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_original_url_key" }),
            ));
        };

        let Entry::Vacant(code_slot) = self.by_short_url.entry(short_url) else {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_pkey" }),
            ));
        };

        let record = UrlRecord::new(short_url, original_url, Utc::now());
        code_slot.insert(record.clone());
        url_slot.insert(record.clone());

        Ok(record)
    }

    fn find_or_insert(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let _allocation = self.allocation.lock();

        if let Some(existing) = self.by_original_url.get(original_url) {
            return Ok(existing.value().clone());
        }

        let count = self.by_short_url.len() as i64;
        self.insert(NewUrlRecord::next(original_url, count))
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.insert(new_record)
    }

    async fn find_or_create(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        self.find_or_insert(original_url)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_original_url
            .get(original_url)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_short_url
            .get(&short_url)
            .map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.by_short_url.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
