//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Store reachability, with the number of stored links when reachable.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DatabaseCheck {
    pub fn ok(links: i64) -> Self {
        Self {
            status: "ok",
            links: Some(links),
            message: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: "error",
            links: None,
            message: Some("Database unavailable".to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.links.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_check_reports_link_count() {
        let value = serde_json::to_value(DatabaseCheck::ok(42)).unwrap();
        assert_eq!(value, json!({ "status": "ok", "links": 42 }));
    }

    #[test]
    fn test_unavailable_check_omits_count() {
        let check = DatabaseCheck::unavailable();
        assert!(!check.is_ok());

        let value = serde_json::to_value(check).unwrap();
        assert_eq!(
            value,
            json!({ "status": "error", "message": "Database unavailable" })
        );
    }
}
