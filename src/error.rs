//! Application error type and its HTTP rendering.
//!
//! Every failure leaves the service as a JSON body of the form
//! `{ "error": "<message>" }` with a matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Message returned when short code allocation runs out of attempts.
pub const ALLOCATION_EXHAUSTED_MESSAGE: &str = "Failed to generate unique short code";

/// Message returned for unexpected faults.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input. Never logged as a server fault.
    #[error("{message}")]
    Validation { message: String },

    /// Unknown short code. A legitimate outcome, not a fault.
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    /// A feature that depends on missing configuration.
    #[error("{message}")]
    Unavailable { message: String },

    /// No free short code was found within the retry bound.
    #[error("{ALLOCATION_EXHAUSTED_MESSAGE} after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error("{message}")]
    Internal { message: String },
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
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
    pub fn allocation_exhausted(attempts: usize) -> Self {
        Self::AllocationExhausted { attempts }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::AllocationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the client.
    ///
    /// Internal details are logged, never returned.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Unauthorized { message }
            | AppError::Unavailable { message } => message.clone(),
            AppError::AllocationExhausted { .. } => ALLOCATION_EXHAUSTED_MESSAGE.to_string(),
            AppError::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// Uses the message of the first failed rule as the client-facing error.
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Validation failed".to_string());

        AppError::bad_request(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
