//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Failure taxonomy shared by the store and the allocator
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the presentation layers. The
//! repository traits are implemented by the infrastructure layer and consumed
//! by the services in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::LinkError;
