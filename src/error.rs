//! Application error type and its HTTP representation.
//!
//! Client-facing error payloads are flat: `{ "error": "<message>" }`.
//! Validation and not-found outcomes are part of the normal API contract and
//! are returned with `200 OK`; only internal failures use `500`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned for rejected URLs.
pub const INVALID_URL: &str = "invalid url";

/// Message returned for unknown short codes.
pub const SHORT_URL_NOT_FOUND: &str = "short url not found";

/// Generic message returned for every internal failure.
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}: {details}")]
    Conflict { message: String, details: Value },

    #[error("{message}: {details}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// The `invalid url` outcome of a registration.
    pub fn invalid_url() -> Self {
        Self::bad_request(INVALID_URL)
    }

    /// The `short url not found` outcome of a lookup.
    pub fn short_url_not_found() -> Self {
        Self::not_found(SHORT_URL_NOT_FOUND)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::NotFound { .. } => StatusCode::OK,
            Self::Conflict { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Validation { message } | AppError::NotFound { message } => message,
            AppError::Conflict { message, details } | AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                INTERNAL_SERVER_ERROR.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps a SQLx error onto the application taxonomy.
///
/// Unique violations become [`AppError::Conflict`] carrying the constraint
/// name; everything else is [`AppError::Internal`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    AppError::internal("Database error", json!({ "reason": e.to_string() }))
}
