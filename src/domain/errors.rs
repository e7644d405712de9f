//! Error taxonomy for link allocation, storage and resolution.

use thiserror::Error;

/// Failures produced by the store, the allocator and the link service.
///
/// Validation failures ([`LinkError::InvalidFormat`], [`LinkError::InvalidUrl`])
/// are raised before any store mutation. [`LinkError::AlreadyExists`] is kept
/// distinct from [`LinkError::Storage`] so callers can ask for another code.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid short code '{code}': {reason}")]
    InvalidFormat { code: String, reason: &'static str },

    #[error("invalid URL '{url}': must be an absolute http:// or https:// URL")]
    InvalidUrl { url: String },

    #[error("short code '{code}' is already taken")]
    AlreadyExists { code: String },

    #[error("short code '{code}' not found")]
    NotFound { code: String },

    #[error("could not allocate a free short code after {attempts} attempts")]
    Exhausted { attempts: usize },

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl LinkError {
    pub fn already_exists(code: impl Into<String>) -> Self {
        Self::AlreadyExists { code: code.into() }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Returns true for errors caused by caller input rather than the system.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Exhausted { .. } | Self::Storage(_))
    }
}
