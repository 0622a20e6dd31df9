//! Admin password gate.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{debug, info};

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Service checking candidate passwords against the configured admin password.
///
/// Both sides are passed through HMAC-SHA256 keyed by a server-side secret and
/// compared with [`Mac::verify_slice`], so the comparison time does not depend
/// on how many leading bytes match.
///
/// When no admin password is configured the gate is closed: every check fails
/// with [`AppError::Unavailable`].
pub struct AdminAuthService {
    signing_secret: Vec<u8>,
    expected_mac: Option<Vec<u8>>,
}

impl AdminAuthService {
    /// Creates the gate.
    ///
    /// # Arguments
    ///
    /// - `admin_password` - the password to accept; `None` or empty disables the gate
    /// - `signing_secret` - HMAC key used for the comparison
    pub fn new(admin_password: Option<&str>, signing_secret: impl Into<Vec<u8>>) -> Self {
        let signing_secret = signing_secret.into();

        let expected_mac = admin_password
            .filter(|p| !p.is_empty())
            .map(|p| Self::mac_with(&signing_secret, p).finalize().into_bytes().to_vec());

        Self {
            signing_secret,
            expected_mac,
        }
    }

    fn mac_with(secret: &[u8], input: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
        mac.update(input.as_bytes());
        mac
    }

    /// Returns whether an admin password is configured.
    pub fn is_enabled(&self) -> bool {
        self.expected_mac.is_some()
    }

    /// Checks a candidate password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if no admin password is configured.
    /// Returns [`AppError::Unauthorized`] if the candidate does not match.
    pub fn verify(&self, candidate: &str) -> Result<(), AppError> {
        let Some(expected) = &self.expected_mac else {
            debug!("Admin check attempted while the gate is disabled");
            return Err(AppError::unavailable("Admin access is not configured"));
        };

        Self::mac_with(&self.signing_secret, candidate)
            .verify_slice(expected)
            .map_err(|_| {
                info!("Admin authentication failed");
                AppError::unauthorized("Invalid password")
            })
    }
}
