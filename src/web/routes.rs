//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, submit_handler};
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /` - Submission form and recent links
/// - `POST /` - Form submission
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler).post(submit_handler))
}
