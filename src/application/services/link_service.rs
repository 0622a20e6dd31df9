//! Short link creation and resolution service.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info, warn};

use crate::domain::entities::ShortLinkEntry;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, generate_code};
use crate::utils::url_validator::validate_url;

/// Path prefix under which short links are served.
pub const SHORT_LINK_PREFIX: &str = "/s/";

/// Code generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSettings {
    pub length: usize,
    pub max_attempts: usize,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub code: String,
    pub original_url: String,
}

/// Outcome of visiting a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code is known; the visit has been counted.
    Redirect(String),
    NotFound,
}

/// Service for creating and resolving short links.
///
/// Owns the collision-checked code generation loop and the redirect decision.
/// The repository it wraps is the single store shared by every handler.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    base_url: String,
    code_settings: CodeSettings,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `repository` - shared short link store
    /// - `base_url` - public origin used to build short URLs (trailing `/` is ignored)
    /// - `code_settings` - generated code length and collision retry bound
    pub fn new(repository: Arc<R>, base_url: impl Into<String>, code_settings: CodeSettings) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            base_url,
            code_settings,
        }
    }

    /// Validates `url`, allocates a free code and stores the mapping.
    ///
    /// Identical URLs are not deduplicated: each call creates a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] ("Invalid URL format") if the URL is not
    /// an absolute HTTP(S) URL; nothing is stored in that case.
    ///
    /// Returns [`AppError::AllocationExhausted`] if no free code was found.
    pub fn create_short_link(&self, url: &str) -> Result<CreatedLink, AppError> {
        validate_url(url).map_err(|e| {
            debug!("Rejected URL for shortening: {}", e);
            AppError::bad_request("Invalid URL format")
        })?;

        let code = self.generate_unique_code()?;
        self.repository.insert(&code, url);

        counter!("shortlinks_created_total").increment(1);
        info!(code = %code, "Created short link");

        Ok(CreatedLink {
            code,
            original_url: url.to_string(),
        })
    }

    /// Resolves a short code, counting the visit when the code is known.
    pub fn resolve(&self, code: &str) -> Resolution {
        match self.repository.resolve_and_count(code) {
            Some(url) => {
                counter!("shortlinks_redirects_total").increment(1);
                debug!(code, "Resolved short link");
                Resolution::Redirect(url)
            }
            None => {
                counter!("shortlinks_not_found_total").increment(1);
                debug!(code, "Short link not found");
                Resolution::NotFound
            }
        }
    }

    /// Returns the stored entry for `code` without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub fn get_stats(&self, code: &str) -> Result<ShortLinkEntry, AppError> {
        self.repository
            .stats(code)
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Builds the public short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}{}{}", self.base_url, SHORT_LINK_PREFIX, code)
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.repository.len()
    }

    /// Draws codes until one is free, up to the configured attempt bound.
    fn generate_unique_code(&self) -> Result<String, AppError> {
        let CodeSettings {
            length,
            max_attempts,
        } = self.code_settings;

        for attempt in 1..=max_attempts {
            let code = generate_code(length);

            if !self.repository.exists(&code) {
                return Ok(code);
            }

            debug!(attempt, "Short code collision");
        }

        counter!("shortlinks_allocation_exhausted_total").increment(1);
        warn!(
            max_attempts,
            stored = self.repository.len(),
            "Could not allocate a free short code"
        );

        Err(AppError::allocation_exhausted(max_attempts))
    }
}
