//! Validation of URLs submitted for shortening.
//!
//! Only absolute `http`/`https` URLs with a host are accepted, so the shortener
//! cannot be turned into a redirector for `javascript:`, `data:` or `file:`
//! targets. The submitted string is not rewritten: whatever passes validation
//! is stored and redirected to verbatim.

use url::Url;

/// Longest URL accepted for shortening, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a candidate URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} bytes ({0})")]
    TooLong(usize),
}

/// Checks that `input` is an absolute `http`/`https` URL.
///
/// Whitespace and control characters anywhere in the input are rejected
/// instead of being trimmed, since the stored value must be usable as a
/// `Location` header as-is.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative input,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes,
/// [`UrlValidationError::MissingHost`] when no host is present and
/// [`UrlValidationError::TooLong`] past [`MAX_URL_LENGTH`].
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("javascript:alert(1)").is_err());
/// assert!(validate_url("not-a-url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong(input.len()));
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::InvalidFormat(
            "contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
