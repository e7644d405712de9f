//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `code` and `long_url` never change after creation. `clicks` is the only
/// field mutated afterwards, and only ever upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// The store assigns `id`, `created_at` and the initial zero click count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            0,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink::new("xyz789", "https://rust-lang.org");

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}
