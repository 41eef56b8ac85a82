//! Repository trait for short URL data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from short codes to original URLs.
///
/// The store owns every [`UrlRecord`]. It supports inserts and exact-match
/// lookups only; records are never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code or the original URL
    /// is already stored.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Returns the record for `original_url`, inserting it under the next
    /// sequential short code (`count + 1`) if it is not stored yet.
    ///
    /// Lookup, count and insert are atomic with respect to other callers,
    /// so concurrent registrations never race for the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the next code is already taken by
    /// another URL (the sequence has a gap).
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_or_create(&self, original_url: &str) -> Result<UrlRecord, AppError>;

    /// Finds the record registered for exactly `original_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record with the given short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks whether the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
