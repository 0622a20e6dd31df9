//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortCode": "aB3xY9",
///   "shortUrl": "https://tools.example.com/s/aB3xY9",
///   "originalUrl": "https://example.com/page"
/// }
/// ```
///
/// # Errors
///
/// - 400 `URL is required` - body unreadable, `url` missing, empty or not a string
/// - 400 `Invalid URL format` - not an absolute HTTP(S) URL
/// - 500 `Failed to generate unique short code` - collision retries exhausted
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected shorten body: {}", rejection.body_text());
        AppError::bad_request("URL is required")
    })?;

    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required"))?;

    let link = state.link_service.create_short_link(&url)?;
    let short_url = state.link_service.get_short_url(&link.code);

    Ok(Json(ShortenResponse {
        short_code: link.code,
        short_url,
        original_url: link.original_url,
    }))
}
