//! Admin gate for statistics routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

type BearerRejection = <AuthBearer as FromRequestParts<AppState>>::Rejection;

/// Lets a request through only when its bearer token is the admin password.
///
/// ```text
/// Authorization: Bearer <admin password>
/// ```
///
/// A missing header, a non-bearer scheme and a wrong password all answer
/// `401 { "error": "Unauthorized" }` with `WWW-Authenticate: Bearer`, so the
/// response does not reveal which check failed. With no admin password
/// configured the answer is `503`.
///
/// Mount with `route_layer` so unknown paths still fall through to 404:
///
/// ```rust,ignore
/// Router::new()
///     .route("/stats/{code}", get(stats_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    bearer: Result<AuthBearer, BearerRejection>,
    req: Request,
    next: Next,
) -> Response {
    let Ok(AuthBearer(password)) = bearer else {
        return challenge();
    };

    match st.admin_auth.verify(&password) {
        Ok(()) => next.run(req).await,
        Err(AppError::Unauthorized { .. }) => challenge(),
        Err(other) => other.into_response(),
    }
}

fn challenge() -> Response {
    let mut response = AppError::unauthorized("Unauthorized").into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    response
}
