//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored mapping from a short code to an original URL
//! - [`NewUrlRecord`] - Input for creating a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
