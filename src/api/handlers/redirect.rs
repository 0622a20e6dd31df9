//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Request Flow
///
/// 1. Look the code up in the store
/// 2. Found: the visit is counted and a 307 Temporary Redirect is returned
/// 3. Not found: 404 with `{ "error": "URL not found" }`
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&code) {
        Resolution::Redirect(url) => {
            let location = HeaderValue::from_str(&url).map_err(|e| {
                AppError::internal(format!("Stored URL for '{code}' is not a valid header: {e}"))
            })?;

            Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
        }
        Resolution::NotFound => Err(AppError::not_found("URL not found")),
    }
}

/// Answers `GET /s` requests that carry no code.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("Missing shortCode")
}
