//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::links::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com",
///   "custom_code": "my-link"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "my-link",
///   "long_url": "https://example.com",
///   "short_url": "http://localhost:5000/my-link",
///   "created_at": "2024-01-01T00:00:00Z",
///   "clicks": 0
/// }
/// ```
///
/// # Errors
///
/// - 400 if the URL or the custom code is invalid
/// - 409 if the custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(&payload.long_url, payload.custom_code.as_deref())
        .await?;

    let short_url = state.short_url(&link.code);

    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, short_url))))
}
