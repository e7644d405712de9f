//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Concrete link service used by the HTTP layer.
pub type AppLinkService = LinkService<SqliteLinkRepository>;

/// State shared by every request.
///
/// The store is reached only through [`LinkService`]; there is no global
/// database handle and no per-process link cache.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public origin used to build short URLs.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
        }
    }

    /// Full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        AppLinkService::short_url(&self.base_url, code)
    }
}
