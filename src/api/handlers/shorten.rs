//! Handler for the shorten endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::{AppError, INVALID_URL_MESSAGE};
use crate::state::AppState;

const SHORTEN_FAILED_MESSAGE: &str = "Server error. Please try again later.";

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortUrl": "http://localhost:3000/aB1cD2eF" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `longUrl` is missing or
/// not an absolute URL. Nothing is written in that case.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload
        .long_url
        .ok_or_else(|| AppError::bad_request(INVALID_URL_MESSAGE))?;

    let shortened = state
        .mapping_service
        .shorten(&long_url)
        .await
        .map_err(|e| e.with_internal_message(SHORTEN_FAILED_MESSAGE))?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: shortened.short_url,
        }),
    ))
}
