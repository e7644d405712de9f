//! # quicklink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity, error taxonomy and the store trait
//! - **Application Layer** ([`application`]) - Code allocation and the submission/resolution flows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and store implementation
//! - **API Layer** ([`api`]) - JSON endpoints, the redirect handler and middleware
//! - **Web Layer** ([`web`]) - HTML submission form and recent links
//!
//! ## Guarantees
//!
//! - Short codes are unique for the lifetime of the store, enforced by a
//!   unique constraint rather than a check-then-insert
//! - Click counters are incremented in a single statement and never lose updates
//! - Random codes escalate in length when the current length keeps colliding
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data.db"
//! export BASE_URL="http://localhost:5000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AllocationPolicy, CodeAllocator, LinkService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::errors::LinkError;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
    pub use crate::utils::is_valid_url;
}
