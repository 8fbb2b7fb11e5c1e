//! Documentation surface mapping stage
//!
//! Crawls the site maps of the main domain and its common documentation
//! subdomains concurrently, counts links whose paths look like
//! documentation, and derives the documentation depth score. Individual
//! endpoint failures are expected (most products have no `support.`
//! subdomain) and simply contribute nothing.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::providers::ScrapeClient;
use crate::types::{ExternalSource, SourceCategory};

use super::signals::DOC_PATH_PATTERNS;

/// Per-endpoint link budget passed to the site map call
pub const MAP_LINK_LIMIT: u32 = 500;

/// Reported doc page counts are capped here
const DOC_PAGE_CAP: u32 = 1000;

/// Subdomain prefixes probed in addition to the bare domain
const DOC_SUBDOMAINS: [&str; 3] = ["docs.", "help.", "support."];

/// Result of mapping the documentation surface
#[derive(Debug)]
pub struct DocsOutcome {
    /// Doc-like links found across all portals, capped at [`DOC_PAGE_CAP`]
    pub docs_found: u32,
    /// Endpoints that yielded at least one doc-like link
    pub endpoints_with_docs: u32,
    /// Bounded depth score derived from the link count
    pub documentation_score: f64,
    /// Documentation portal source record (always produced)
    pub source: ExternalSource,
}

impl DocsOutcome {
    pub fn has_documentation(&self) -> bool {
        self.docs_found > 0 || self.endpoints_with_docs > 0
    }
}

/// Map the documentation surface of `domain` across its common portals.
pub async fn map_documentation(scrape: &ScrapeClient, domain: &str) -> DocsOutcome {
    let mut endpoints = vec![format!("https://{domain}")];
    for prefix in DOC_SUBDOMAINS {
        endpoints.push(format!("https://{prefix}{domain}"));
    }

    let maps = join_all(
        endpoints
            .iter()
            .map(|url| scrape.map_site(url, MAP_LINK_LIMIT)),
    )
    .await;

    let mut total_doc_links: u32 = 0;
    let mut endpoints_with_docs: u32 = 0;
    let mut sample_link: Option<String> = None;

    for (endpoint, result) in endpoints.iter().zip(maps) {
        let links = match result {
            Ok(links) => links,
            Err(e) => {
                warn!("Site map failed for {}: {}", endpoint, e);
                continue;
            }
        };

        let mut matched: u32 = 0;
        for link in &links {
            let lower = link.to_lowercase();
            if DOC_PATH_PATTERNS.iter().any(|p| lower.contains(p)) {
                matched += 1;
                if sample_link.is_none() {
                    sample_link = Some(link.clone());
                }
            }
        }

        if matched > 0 {
            endpoints_with_docs += 1;
            total_doc_links += matched;
        }
        debug!("{}: {} doc links of {} mapped", endpoint, matched, links.len());
    }

    let docs_found = total_doc_links.min(DOC_PAGE_CAP);
    let documentation_score =
        (40.0 + f64::from(total_doc_links.min(50)) * 1.2).min(100.0);

    let sentiment = if docs_found > 500 {
        0.4
    } else if docs_found > 100 {
        0.6
    } else {
        0.8
    };
    let verdict = if docs_found > 500 {
        "Massive docs suggest complexity."
    } else if docs_found > 100 {
        "Extensive coverage."
    } else {
        "Focused docs."
    };

    let source = ExternalSource {
        name: "Documentation Portal".to_string(),
        category: SourceCategory::Documentation,
        data_points: docs_found,
        sentiment,
        friction_mentions: Vec::new(),
        url: sample_link.unwrap_or_else(|| format!("https://{domain}/docs")),
        summary: format!(
            "Found ~{docs_found} doc pages across {endpoints_with_docs} portals. {verdict}"
        ),
    };

    DocsOutcome {
        docs_found,
        endpoints_with_docs,
        documentation_score,
        source,
    }
}

/// Reject products without the public surfaces the analysis depends on.
///
/// Only applied to products with no known baseline; a baseline entry is
/// itself sufficient evidence that the product is analyzable.
pub fn validation_gate(
    display_name: &str,
    has_signup: bool,
    has_documentation: bool,
) -> Result<(), AnalysisError> {
    let message = match (has_signup, has_documentation) {
        (true, true) => return Ok(()),
        (false, false) => format!(
            "We can only analyze products with public-facing sign-up options and \
             documentation. {display_name} appears to be missing both. Please try a SaaS \
             product website with visible sign-up and docs."
        ),
        (false, true) => format!(
            "We can only analyze products with public-facing sign-up options. \
             {display_name} doesn't appear to have a visible sign-up, free trial, or \
             \"get started\" option. This tool works best with self-serve SaaS products."
        ),
        (true, false) => format!(
            "We can only analyze products with public documentation. {display_name} \
             doesn't appear to have visible docs, help center, or knowledge base. Please \
             try a product with public documentation."
        ),
    };
    Err(AnalysisError::ValidationFailed(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ScrapeClient {
        let mut config = ProvidersConfig::default();
        config.scrape.base_url = server.uri();
        config.scrape.api_key = Some("fc-test".to_string());
        ScrapeClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn counts_doc_links_across_portals() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/map"))
            .and(body_partial_json(
                serde_json::json!({ "url": "https://example.com" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "links": [
                    "https://example.com/docs/intro",
                    "https://example.com/pricing",
                    "https://example.com/guide/setup"
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/map"))
            .and(body_partial_json(
                serde_json::json!({ "url": "https://docs.example.com" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "links": ["https://docs.example.com/reference/api"]
            })))
            .mount(&server)
            .await;
        // help. and support. do not resolve
        Mock::given(method("POST"))
            .and(path("/v1/map"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = map_documentation(&client_for(&server), "example.com").await;

        assert_eq!(outcome.docs_found, 3);
        assert_eq!(outcome.endpoints_with_docs, 2);
        assert!(outcome.has_documentation());
        assert_eq!(outcome.source.url, "https://example.com/docs/intro");
        assert!((outcome.documentation_score - 43.6).abs() < 1e-9);
        assert!((outcome.source.sentiment - 0.8).abs() < f32::EPSILON);
        assert!(outcome
            .source
            .summary
            .starts_with("Found ~3 doc pages across 2 portals."));
    }

    #[tokio::test]
    async fn total_failure_yields_empty_outcome_with_fallback_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/map"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let outcome = map_documentation(&client_for(&server), "example.com").await;

        assert_eq!(outcome.docs_found, 0);
        assert!(!outcome.has_documentation());
        assert_eq!(outcome.source.url, "https://example.com/docs");
        assert!((outcome.documentation_score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn documentation_score_saturates_at_fifty_links() {
        // Score formula only credits the first 50 links
        let score = (40.0 + f64::from(50u32) * 1.2_f64).min(100.0);
        assert!((score - 100.0).abs() < 1e-9);
    }

    // ==== validation gate ====

    #[test]
    fn gate_passes_with_both_surfaces() {
        assert!(validation_gate("Acme", true, true).is_ok());
    }

    #[test]
    fn gate_names_both_missing_surfaces() {
        let err = validation_gate("Acme", false, false).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sign-up options and documentation"));
        assert!(msg.contains("Acme appears to be missing both"));
    }

    #[test]
    fn gate_rejects_missing_signup() {
        let err = validation_gate("Acme", false, true).unwrap_err();
        assert!(err
            .to_string()
            .contains("doesn't appear to have a visible sign-up"));
    }

    #[test]
    fn gate_rejects_missing_docs() {
        let err = validation_gate("Acme", true, false).unwrap_err();
        assert!(err
            .to_string()
            .contains("doesn't appear to have visible docs"));
    }
}
