//! Handler for URL registration endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its short code.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single `url` field:
///
/// ```text
/// url=https://www.freecodecamp.org
/// ```
///
/// A body that is missing or cannot be read as a form is treated like an
/// empty `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - `200 OK` with `{ "error": "invalid url" }` if the URL is rejected
/// - `500 Internal Server Error` with `{ "error": "internal server error" }`
///   on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "Unreadable registration form");
            ShortenForm::default()
        }
    };

    let record = state.registration_service.register(&form.url).await?;

    Ok(Json(record.into()))
}
