//! DTOs for the URL registration endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Form-encoded registration request.
///
/// A missing `url` field deserializes to an empty string, which the
/// registration service rejects as an invalid URL.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Successful registration payload.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlRecord> for ShortenResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
