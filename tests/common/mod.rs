#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use shorturl::domain::entities::{NewUrlRecord, UrlRecord};
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::{InMemoryUrlRepository, PgUrlRepository};
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// A store whose every operation fails, as if the database were unreachable.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn create(&self, _new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        Err(unreachable_store())
    }

    async fn find_or_create(&self, _original_url: &str) -> Result<UrlRecord, AppError> {
        Err(unreachable_store())
    }

    async fn find_by_original_url(
        &self,
        _original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Err(unreachable_store())
    }

    async fn find_by_short_url(&self, _short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(unreachable_store())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unreachable_store())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Wraps a store and yields to the scheduler around every call, the way a
/// networked store suspends while waiting on I/O. Concurrent callers get
/// interleaved between each step.
pub struct YieldingRepository<R> {
    inner: R,
    yields: usize,
}

impl<R> YieldingRepository<R> {
    pub fn new(inner: R, yields: usize) -> Self {
        Self { inner, yields }
    }

    async fn pause(&self) {
        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl<R: UrlRepository> UrlRepository for YieldingRepository<R> {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.pause().await;
        let result = self.inner.create(new_record).await;
        self.pause().await;
        result
    }

    async fn find_or_create(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        self.pause().await;
        let result = self.inner.find_or_create(original_url).await;
        self.pause().await;
        result
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        self.pause().await;
        let result = self.inner.find_by_original_url(original_url).await;
        self.pause().await;
        result
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        self.pause().await;
        let result = self.inner.find_by_short_url(short_url).await;
        self.pause().await;
        result
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.pause().await;
        let result = self.inner.count().await;
        self.pause().await;
        result
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}

fn unreachable_store() -> AppError {
    AppError::internal("Database error", json!({ "reason": "connection refused" }))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

pub async fn create_test_record(repository: &dyn UrlRepository, url: &str) -> UrlRecord {
    let count = repository.count().await.unwrap();
    repository
        .create(NewUrlRecord::next(url, count))
        .await
        .unwrap()
}

pub async fn insert_pg_record(pool: &PgPool, short_url: i64, url: &str) {
    sqlx::query("INSERT INTO urls (short_url, original_url) VALUES ($1, $2)")
        .bind(short_url)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}
