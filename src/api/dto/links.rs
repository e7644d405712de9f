//! DTOs for link listing and lookup endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Default page size of `GET /api/links`.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Query parameters for `GET /api/links`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListLinksQuery {
    /// Number of links to return (default: 50, max: 500).
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u32>,
}

impl ListLinksQuery {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// A stored link as exposed by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}

/// A single link together with its public short URL.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            short_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
