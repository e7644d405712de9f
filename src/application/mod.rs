//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single API for the submission and resolution flows.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Custom code validation and random code generation
//! - [`services::link_service::LinkService`] - Short link creation, resolution and listing

pub mod services;
