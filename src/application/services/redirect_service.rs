//! Short code resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for resolving short codes back to their original URLs.
pub struct RedirectService<R: UrlRepository + ?Sized> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Resolves a short code as supplied by a client to its redirect target.
    ///
    /// The code is compared as an integer, so `"01"` resolves like `"1"`.
    /// Input that is not a decimal integer can never match a stored code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`short url not found`) if no record matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let Ok(short_url) = short_code.parse::<i64>() else {
            debug!(short_code, "Short code is not an integer");
            return Err(AppError::short_url_not_found());
        };

        self.get_record(short_url)
            .await
            .map(|record| record.original_url)
    }

    /// Retrieves the record stored under `short_url`.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn get_record(&self, short_url: i64) -> Result<UrlRecord, AppError> {
        if short_url <= 0 {
            return Err(AppError::short_url_not_found());
        }

        let record = self
            .url_repository
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(AppError::short_url_not_found)?;

        debug!(short_url, original_url = %record.original_url, "Resolved short url");

        Ok(record)
    }
}
