//! Handler for the admin password check.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::admin::{AdminAuthRequest, AdminAuthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Checks a submitted admin password.
///
/// # Endpoint
///
/// `POST /api/admin/auth`
///
/// # Errors
///
/// - 400 `Password is required`
/// - 401 `Invalid password`
/// - 503 `Admin access is not configured` when `ADMIN_PASSWORD` is unset
pub async fn admin_auth_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdminAuthRequest>, JsonRejection>,
) -> Result<Json<AdminAuthResponse>, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::bad_request("Password is required"))?;

    payload.validate()?;

    let password = payload
        .password
        .ok_or_else(|| AppError::bad_request("Password is required"))?;

    state.admin_auth.verify(&password)?;

    Ok(Json(AdminAuthResponse { success: true }))
}
