//! URL registration service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Service for registering URLs and allocating sequential short codes.
///
/// Registration is idempotent: submitting a URL that is already stored
/// returns the existing record instead of allocating a new code.
pub struct RegistrationService<R: UrlRepository + ?Sized> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> RegistrationService<R> {
    /// Creates a new registration service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Registers `raw_url` and returns its record.
    ///
    /// # Algorithm
    ///
    /// 1. Reject the URL unless it is an absolute `http`/`https` URL
    /// 2. Return the existing record for the exact same URL, if any
    /// 3. Otherwise let the store insert it with `short_url = count + 1`
    ///
    /// Step 3 is atomic inside the store, so concurrent registrations of
    /// different URLs get distinct consecutive codes and concurrent
    /// registrations of the same URL agree on one record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`invalid url`) if the URL is rejected.
    /// Returns [`AppError::Internal`] on storage errors, including a next
    /// code that is already taken because the sequence has a gap.
    pub async fn register(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        if let Err(reason) = validate_url(raw_url) {
            debug!(url = raw_url, %reason, "Rejected URL");
            return Err(AppError::invalid_url());
        }

        if let Some(existing) = self.url_repository.find_by_original_url(raw_url).await? {
            debug!(short_url = existing.short_url, "URL already registered");
            return Ok(existing);
        }

        match self.url_repository.find_or_create(raw_url).await {
            Ok(record) => {
                info!(
                    short_url = record.short_url,
                    original_url = %record.original_url,
                    "Registered URL"
                );
                Ok(record)
            }
            Err(AppError::Conflict { details, .. }) => {
                error!(%details, "Next short url is already taken");
                Err(AppError::internal(
                    "Failed to allocate short url",
                    json!({ "reason": "Short url sequence has a gap", "conflict": details }),
                ))
            }
            Err(e) => Err(e),
        }
    }
}
