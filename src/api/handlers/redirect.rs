//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Response
///
/// `302 Found` with the original URL in the `Location` header.
///
/// # Errors
///
/// - `200 OK` with `{ "error": "short url not found" }` if the code is unknown
/// - `500 Internal Server Error` with `{ "error": "internal server error" }`
///   on storage failures
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve(&short_url).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
