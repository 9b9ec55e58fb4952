//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short URL
pub fn routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
