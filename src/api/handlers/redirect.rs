//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};
use url::Url;

use crate::error::{AppError, SERVER_ERROR_MESSAGE};
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Responses
///
/// - **301 Moved Permanently** with `Location` set to the stored long URL
/// - **404 Not Found** `{ "error": "URL not found." }` for unknown slugs
/// - **500 Internal Server Error** `{ "error": "Server error." }` on store failures
///
/// Reads never modify the stored mapping.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.mapping_service.resolve(&slug).await?;

    let location = location_header(&mapping.long_url)?;

    info!("Redirecting {} to {}", slug, mapping.long_url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, falling back to the serialized (percent-encoded)
/// URL when the stored text is not a valid header value.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return Ok(value);
    }

    Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            error!("Stored URL cannot be sent as a Location header: {:?}", long_url);
            AppError::internal(SERVER_ERROR_MESSAGE)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_verbatim() {
        assert_eq!(
            location_header("https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            location_header("https://example.com/search?q=rust#top").unwrap(),
            "https://example.com/search?q=rust#top"
        );
    }

    #[test]
    fn test_location_header_encodes_control_characters() {
        let value = location_header("https://example.com/a\u{7f}b").unwrap();
        assert_eq!(value, "https://example.com/a%7Fb");
    }

    #[test]
    fn test_location_header_unencodable_is_internal_error() {
        let err = location_header("no scheme\u{7f}").unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.to_string(), "Server error.");
    }
}
