//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A registered URL and the sequential short code assigned to it.
///
/// Records are created once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_url: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(short_url: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_url,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_url: i64,
}

impl NewUrlRecord {
    /// Builds the record stored for `original_url` when `existing` records
    /// are already present.
    pub fn next(original_url: impl Into<String>, existing: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: existing + 1,
        }
    }
}
