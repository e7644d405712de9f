//! DTOs for link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten one URL.
///
/// Scheme and custom code rules are enforced by the link service so that the
/// JSON API and the HTML form report the same errors.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute http/https URL).
    #[validate(length(max = 8192, message = "URL must be at most 8192 characters"))]
    pub long_url: String,

    /// Optional custom short code; omitted, null or blank means "generate one".
    pub custom_code: Option<String>,
}
