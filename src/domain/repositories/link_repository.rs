//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::LinkError;
use async_trait::async_trait;

/// Durable, uniqueness-enforcing store for short links.
///
/// Implementations must make `insert` atomic with respect to `exists` and
/// `increment_clicks` atomic per code. Both are expected to be enforced by
/// the backing engine (unique constraint, single-statement update) rather
/// than by locking in the application.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns true if a link with this code exists.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, LinkError>;

    /// Creates a link with zero clicks and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::AlreadyExists`] if the code is taken, including
    /// when a concurrent insert of the same code won the race.
    ///
    /// Returns [`LinkError::Storage`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, LinkError>;

    /// Finds a link by its short code. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on database errors.
    async fn find(&self, code: &str) -> Result<Option<Link>, LinkError>;

    /// Atomically adds one click and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link has this code.
    /// Returns [`LinkError::Storage`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<Link, LinkError>;

    /// Returns the `limit` most recently created links, newest first.
    ///
    /// Links created at the same instant are ordered by insertion, later
    /// inserts first.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on database errors.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Link>, LinkError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, LinkError>;
}
