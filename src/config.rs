//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public origin used in returned short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers for rate limiting (default: `false`)
//! - `SHORT_CODE_LENGTH` - Length of generated codes (default: 6, range: 4-32)
//! - `SHORT_CODE_MAX_ATTEMPTS` - Collision retries before giving up (default: 10, range: 1-100)
//! - `ADMIN_PASSWORD` - Enables the admin gate when set
//! - `ADMIN_SIGNING_SECRET` - HMAC key for password checks (default: random per process)
//!
//! Short links live in memory only and are lost on restart; there is nothing
//! to configure for persistence.

use anyhow::{Context, Result};
use rand::Rng;
use std::env;
use url::Url;

use crate::application::services::CodeSettings;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub code_length: usize,
    pub code_max_attempts: usize,
    /// Password accepted by the admin gate. `None` disables admin endpoints.
    pub admin_password: Option<String>,
    /// HMAC key for admin password comparison.
    pub admin_signing_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let code_length = parse_var("SHORT_CODE_LENGTH", DEFAULT_CODE_LENGTH)?;
        let code_max_attempts = parse_var("SHORT_CODE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;

        let admin_password = env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty());

        let admin_signing_secret = env::var("ADMIN_SIGNING_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(random_secret);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            behind_proxy,
            code_length,
            code_max_attempts,
            admin_password,
            admin_signing_secret,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - code length or attempt bound is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "SHORT_CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        Ok(())
    }

    /// Code generation settings derived from this configuration.
    pub fn code_settings(&self) -> CodeSettings {
        CodeSettings {
            length: self.code_length,
            max_attempts: self.code_max_attempts,
        }
    }

    /// Returns whether the admin gate is enabled.
    pub fn is_admin_enabled(&self) -> bool {
        self.admin_password.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Short codes: length {}, max {} attempts",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!(
            "  Admin gate: {}",
            if self.is_admin_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!("  Storage: in-memory (links are lost on restart)");
    }
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a positive integer, got '{v}'")),
        Err(_) => Ok(default),
    }
}

/// Generates a per-process HMAC key as 64 hex characters.
fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
