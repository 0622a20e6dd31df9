//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};
use validator::Validate;

/// Request to shorten a single URL.
///
/// A `url` that is missing, `null` or not a JSON string deserializes to
/// `None`, so every malformed shape ends in the same "URL is required" error.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
}

/// A created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_url() {
        let req = parse(json!({ "url": "https://example.com" }));
        assert_eq!(req.url.as_deref(), Some("https://example.com"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_url() {
        let req = parse(json!({}));
        assert!(req.url.is_none());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_string_url_becomes_none() {
        for value in [json!(42), json!(null), json!(["a"]), json!({ "href": "x" }), json!(true)] {
            let req = parse(json!({ "url": value }));
            assert!(req.url.is_none());
        }
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let req = parse(json!({ "url": "" }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let body = serde_json::to_value(ShortenResponse {
            short_code: "abc123".to_string(),
            short_url: "https://tools.example.com/s/abc123".to_string(),
            original_url: "https://example.com".to_string(),
        })
        .unwrap();

        assert_eq!(body["shortCode"], "abc123");
        assert_eq!(body["shortUrl"], "https://tools.example.com/s/abc123");
        assert_eq!(body["originalUrl"], "https://example.com");
    }
}
