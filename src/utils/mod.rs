//! Utility functions used across the application.
//!
//! - [`url_validator`] - Absolute web URL validation

pub mod url_validator;
