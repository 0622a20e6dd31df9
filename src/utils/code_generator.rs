//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-symbol alphabet `[A-Za-z0-9]`, which
//! keeps them URL-safe without any encoding step.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default number of draws before giving up on finding a free code.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Generates a random alphanumeric code of `length` characters.
///
/// With the default length there are 62^6 (about 5.6e10) possible codes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
