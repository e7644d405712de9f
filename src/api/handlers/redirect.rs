//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::errors::LinkError;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found_page;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically add one click to the link
/// 2. Return `302 Found` pointing at the long URL
///
/// # Errors
///
/// An unknown code renders the home page with a "Short code not found."
/// notice and status 404; nothing is counted. Storage faults return the
/// JSON error envelope.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&code).await {
        Ok(link) => Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]).into_response()),
        Err(LinkError::NotFound { .. }) => {
            tracing::debug!("Unknown short code {}", code);
            not_found_page(&state).await
        }
        Err(e) => Err(e.into()),
    }
}
