//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create a short URL
//! - `GET  /health`   - Health check: mapping store connectivity
//! - `GET  /{slug}`   - Short link redirect
//!
//! # Middleware
//!
//! - **CORS** - Every origin permitted
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application routes with CORS and tracing applied.
///
/// `/health` is matched before the `/{slug}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
