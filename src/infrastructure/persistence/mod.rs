//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage, lookup and click counting
//!
//! Pool construction and migrations live in [`pool`].

pub mod pool;
pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
