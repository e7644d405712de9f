//! Long URL validation.

use url::Url;

/// Returns true if `raw` is an absolute `http`/`https` URL with a host.
///
/// The authority must be written out (`scheme://host`). Inputs such as
/// `http:example.com` or `http:///path`, which the URL parser would repair,
/// are rejected.
pub fn is_valid_url(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    let has_authority = raw
        .trim_start()
        .get(parsed.scheme().len()..)
        .and_then(|rest| rest.strip_prefix("://"))
        .is_some_and(|authority| !authority.starts_with('/'));

    has_authority && parsed.host_str().is_some_and(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/path"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://sub.example.com:8443/a?b=c#d"));
        assert!(is_valid_url("http://127.0.0.1:5000/"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(is_valid_url("HTTPS://example.com"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_url("ftp://x.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
    }

    #[test]
    fn test_rejects_non_urls() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("//example.com"));
    }

    #[test]
    fn test_rejects_missing_authority() {
        assert!(!is_valid_url("http:example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http:///path"));
        assert!(!is_valid_url("https:////example.com"));
    }
}
