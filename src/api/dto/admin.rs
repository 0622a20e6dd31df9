//! DTOs for the admin password gate.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};
use validator::Validate;

#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct AdminAuthRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminAuthResponse {
    pub success: bool,
}
