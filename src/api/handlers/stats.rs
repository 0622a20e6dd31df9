//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored metadata for a short code without counting a visit.
///
/// # Endpoint
///
/// `GET /api/stats/{code}` (admin password required)
///
/// # Response
///
/// ```json
/// {
///   "shortCode": "aB3xY9",
///   "originalUrl": "https://example.com/page",
///   "createdAt": "2026-01-01T12:00:00Z",
///   "clicks": 3
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let entry = state.link_service.get_stats(&code)?;

    Ok(Json(StatsResponse::from_entry(code, entry)))
}
