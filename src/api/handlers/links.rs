//! Handlers for link listing and lookup.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::links::{LinkItem, LinkResponse, ListLinksQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created links.
///
/// # Endpoint
///
/// `GET /api/links?limit=50`
///
/// # Response
///
/// ```json
/// [
///   {
///     "code": "abc123",
///     "long_url": "https://example.com",
///     "created_at": "2024-01-01T00:00:00Z",
///     "clicks": 3
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside 1-500.
pub async fn links_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListLinksQuery>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    params.validate()?;

    let links = state.link_service.recent(params.limit()).await?;

    Ok(Json(links.into_iter().map(LinkItem::from).collect()))
}

/// Returns one link without counting a click.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get(&code).await?;
    let short_url = state.short_url(&link.code);

    Ok(Json(LinkResponse::new(link, short_url)))
}
