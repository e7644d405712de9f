//! Link creation, resolution and listing service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::code_allocator::{AllocationPolicy, CodeAllocator};
use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::is_valid_url;

/// Insert attempts for a generated code that keeps losing insert races.
const MAX_INSERT_ATTEMPTS: usize = 5;

/// Service for creating, resolving and listing short links.
///
/// Submission validates the URL first, then allocates a code and inserts it.
/// The store's unique constraint is the final arbiter: a generated code lost
/// to a concurrent insert is regenerated, a custom one is reported as taken.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, policy: AllocationPolicy) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone(), policy);
        Self {
            link_repository,
            allocator,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - The URL to shorten, surrounding whitespace is ignored
    /// - `custom_code` - Optional custom short code; blank means "generate one"
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidUrl`] if the URL is empty or not http(s), before any store call
    /// - [`LinkError::InvalidFormat`] if the custom code is malformed
    /// - [`LinkError::AlreadyExists`] if the custom code is taken
    /// - [`LinkError::Exhausted`] if no free code could be generated
    /// - [`LinkError::Storage`] on database errors
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, LinkError> {
        let long_url = long_url.trim();
        if long_url.is_empty() || !is_valid_url(long_url) {
            return Err(LinkError::InvalidUrl {
                url: long_url.to_string(),
            });
        }

        let link = match custom_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(custom) => {
                let code = self.allocator.validate_custom(custom).await?;
                self.link_repository
                    .insert(NewLink::new(code, long_url))
                    .await?
            }
            None => self.insert_generated(long_url).await?,
        };

        info!("Created short link {} -> {}", link.code, link.long_url);
        Ok(link)
    }

    /// Resolves a code for a redirect, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link matches the code; no click
    /// is recorded in that case.
    pub async fn resolve(&self, code: &str) -> Result<Link, LinkError> {
        let link = self.link_repository.increment_clicks(code).await?;
        debug!("Resolved {} (clicks: {})", link.code, link.clicks);
        Ok(link)
    }

    /// Retrieves a link without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link matches the code.
    pub async fn get(&self, code: &str) -> Result<Link, LinkError> {
        self.link_repository
            .find(code)
            .await?
            .ok_or_else(|| LinkError::not_found(code))
    }

    /// Returns the `limit` most recent links, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Link>, LinkError> {
        self.link_repository.list_recent(limit).await
    }

    /// Counts all stored links.
    pub async fn count(&self) -> Result<i64, LinkError> {
        self.link_repository.count().await
    }

    /// Builds the public short URL for a code.
    pub fn short_url(base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Generates a code and inserts it, regenerating on lost insert races.
    async fn insert_generated(&self, long_url: &str) -> Result<Link, LinkError> {
        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let code = self.allocator.generate().await?;

            match self
                .link_repository
                .insert(NewLink::new(code, long_url))
                .await
            {
                Err(LinkError::AlreadyExists { code }) => {
                    warn!(
                        "Generated code {} was taken before insert (attempt {}/{})",
                        code, attempt, MAX_INSERT_ATTEMPTS
                    );
                }
                result => return result,
            }
        }

        Err(LinkError::Exhausted {
            attempts: MAX_INSERT_ATTEMPTS,
        })
    }
}
