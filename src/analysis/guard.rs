//! Target URL validation (SSRF pre-filter)
//!
//! The validated URL is later handed to a third-party scraping provider, but
//! everything downstream — candidate doc subdomains included — derives from
//! the hostname accepted here, so internal and metadata addresses must be
//! rejected before any upstream call is attempted.

use url::Url;

use crate::error::AnalysisError;

/// Maximum accepted input length
const MAX_URL_LEN: usize = 2048;

/// Hostnames that always mean "this machine"
const LOCALHOST_NAMES: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0", "::1", "[::1]"];

/// Cloud metadata endpoints
const METADATA_HOSTS: &[&str] = &["169.254.169.254", "metadata.google.internal"];

/// A validated, canonicalized analysis target
#[derive(Debug, Clone)]
pub struct ValidatedTarget {
    /// Canonical absolute URL
    pub url: String,
    /// Lowercase hostname with any leading `www.` stripped
    pub domain: String,
}

/// Parse and sanitize a raw input URL.
///
/// Rejects oversized input, unparsable URLs, non-http(s) schemes, localhost
/// and private/link-local IP ranges, cloud metadata endpoints, and hostnames
/// without a TLD dot.
pub fn validate_target(raw: &str) -> Result<ValidatedTarget, AnalysisError> {
    let raw = raw.trim();

    if raw.len() > MAX_URL_LEN {
        return Err(AnalysisError::InvalidInput("URL is too long".to_string()));
    }

    let with_scheme = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let url = Url::parse(&with_scheme)
        .map_err(|_| AnalysisError::InvalidInput("Invalid URL format".to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AnalysisError::InvalidInput(
            "Only HTTP and HTTPS URLs are allowed".to_string(),
        ));
    }

    let hostname = url
        .host_str()
        .ok_or_else(|| AnalysisError::InvalidInput("Invalid URL format".to_string()))?
        .to_lowercase();

    if LOCALHOST_NAMES.contains(&hostname.as_str()) {
        return Err(AnalysisError::ForbiddenTarget(
            "Internal addresses are not allowed".to_string(),
        ));
    }

    if is_private_address(&hostname) {
        return Err(AnalysisError::ForbiddenTarget(
            "Private IP addresses are not allowed".to_string(),
        ));
    }

    if METADATA_HOSTS.contains(&hostname.as_str()) {
        return Err(AnalysisError::ForbiddenTarget(
            "Metadata endpoints are not allowed".to_string(),
        ));
    }

    // Require a TLD dot so bare hostnames don't reach the provider
    if !hostname.contains('.') {
        return Err(AnalysisError::InvalidInput(
            "Invalid domain name".to_string(),
        ));
    }

    let domain = hostname
        .strip_prefix("www.")
        .unwrap_or(&hostname)
        .to_string();

    Ok(ValidatedTarget {
        url: url.to_string(),
        domain,
    })
}

/// Hostname prefix check for private, loopback, and link-local ranges.
///
/// Covers 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16, 169.254.0.0/16,
/// 127.0.0.0/8, and 0.0.0.0/8.
fn is_private_address(hostname: &str) -> bool {
    if hostname.starts_with("10.")
        || hostname.starts_with("192.168.")
        || hostname.starts_with("169.254.")
        || hostname.starts_with("127.")
        || hostname.starts_with("0.")
    {
        return true;
    }

    // 172.16.0.0/12: second octet 16-31
    if let Some(rest) = hostname.strip_prefix("172.") {
        if let Some(second) = rest.split('.').next() {
            if let Ok(octet) = second.parse::<u8>() {
                return (16..=31).contains(&octet);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_forbidden(input: &str) {
        match validate_target(input) {
            Err(AnalysisError::ForbiddenTarget(_)) => {}
            other => panic!("expected ForbiddenTarget for {}, got {:?}", input, other),
        }
    }

    fn assert_invalid(input: &str) {
        match validate_target(input) {
            Err(AnalysisError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput for {}, got {:?}", input, other),
        }
    }

    // ========================================================================
    // Accepted targets
    // ========================================================================

    #[test]
    fn accepts_plain_domain_and_adds_scheme() {
        let target = validate_target("linear.app").unwrap();
        assert_eq!(target.url, "https://linear.app/");
        assert_eq!(target.domain, "linear.app");
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_target("http://example.com").is_ok());
        assert!(validate_target("https://example.com").is_ok());
    }

    #[test]
    fn strips_www_prefix_from_domain() {
        let target = validate_target("https://www.notion.so").unwrap();
        assert_eq!(target.domain, "notion.so");
    }

    #[test]
    fn lowercases_hostname() {
        let target = validate_target("https://Example.COM/path").unwrap();
        assert_eq!(target.domain, "example.com");
    }

    // ========================================================================
    // Rejected input formats
    // ========================================================================

    #[test]
    fn rejects_oversized_url() {
        let long = format!("https://example.com/{}", "a".repeat(2100));
        assert_invalid(&long);
    }

    #[test]
    fn rejects_unparsable_url() {
        assert_invalid("http://");
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_invalid("ftp://example.com");
        assert_invalid("file:///etc/passwd");
        assert_invalid("gopher://example.com");
    }

    #[test]
    fn rejects_hostname_without_tld() {
        assert_invalid("https://intranet");
    }

    // ========================================================================
    // SSRF defenses
    // ========================================================================

    #[test]
    fn rejects_localhost_variants() {
        assert_forbidden("http://localhost");
        assert_forbidden("http://127.0.0.1");
        assert_forbidden("http://0.0.0.0");
        assert_forbidden("http://[::1]");
    }

    #[test]
    fn rejects_private_ranges() {
        assert_forbidden("http://10.0.0.5");
        assert_forbidden("http://192.168.1.1");
        assert_forbidden("http://172.16.0.1");
        assert_forbidden("http://172.31.255.255");
        assert_forbidden("http://127.1.2.3");
    }

    #[test]
    fn accepts_public_172_addresses() {
        // 172.32.x.x is outside the 172.16.0.0/12 private block
        assert!(validate_target("http://172.32.0.1").is_ok());
    }

    #[test]
    fn rejects_link_local_and_metadata() {
        assert_forbidden("http://169.254.169.254");
        assert_forbidden("http://169.254.0.1");
        assert_forbidden("http://metadata.google.internal");
    }
}
