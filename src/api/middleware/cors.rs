//! Cross-origin resource sharing.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer that permits every origin.
///
/// Adds `Access-Control-Allow-Origin: *` to every response and answers
/// preflight requests for the shorten endpoint. Browsers may send `Origin`,
/// `X-Requested-With`, `Content-Type` and `Accept`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
