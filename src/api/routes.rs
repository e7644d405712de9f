//! API route configuration.
//!
//! Routes are registered with their full `/api/...` paths rather than nested
//! under a prefix, so `/api` itself stays free for `GET /{code}`.

use crate::api::handlers::{health_handler, link_handler, links_list_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /api/shorten`       - Create a short link
/// - `GET  /api/links`         - Most recent links
/// - `GET  /api/links/{code}`  - One link, without counting a click
/// - `GET  /api/health`        - Database health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/links", get(links_list_handler))
        .route("/api/links/{code}", get(link_handler))
        .route("/api/health", get(health_handler))
}
