//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate `New*` struct so the store can own generated fields.

pub mod link;

pub use link::{Link, NewLink};
