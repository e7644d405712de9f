//! Shared helpers: code generation, URL validation and database error inspection.

pub mod code_generator;
pub mod db_error;
pub mod url_validator;

pub use url_validator::is_valid_url;
