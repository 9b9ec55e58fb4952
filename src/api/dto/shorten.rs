//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_long_url;

/// Request to shorten a single URL.
///
/// ```json
/// { "longUrl": "https://example.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute).
    #[serde(rename = "longUrl")]
    #[validate(required, custom(function = "validate_long_url"))]
    pub long_url: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
