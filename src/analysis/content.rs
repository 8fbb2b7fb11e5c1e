//! Landing page content and navigation stage
//!
//! Fires the two scraping-provider requests concurrently, then classifies
//! sign-up and template evidence from the returned text and links. Both
//! calls are best-effort: a failure degrades to empty defaults so the
//! pipeline keeps going.

use tracing::{debug, warn};

use crate::providers::{PageScrape, ScrapeClient};
use crate::types::{ExternalSource, NavigationProfile, SourceCategory};

use super::signals::{has_template_signal, SignupSignals};

/// Everything gathered from the landing page
#[derive(Debug, Default)]
pub struct ContentOutcome {
    /// Lowercased landing page text (empty when the scrape failed)
    pub corpus: String,
    /// Tiered sign-up evidence
    pub signup: SignupSignals,
    /// Template keywords found in the landing page text
    pub found_templates: bool,
    /// Extracted navigation structure (default when extraction failed)
    pub navigation: NavigationProfile,
    /// Landing page plus a capped sample of its outbound links
    pub pages_analyzed: u32,
    /// Landing page source record (only when the scrape succeeded)
    pub source: Option<ExternalSource>,
}

/// Scrape the landing page and extract its navigation concurrently.
pub async fn gather(scrape: &ScrapeClient, url: &str) -> ContentOutcome {
    let (page_result, nav_result) =
        tokio::join!(scrape.scrape_page(url), scrape.extract_navigation(url));

    let mut outcome = ContentOutcome::default();

    match page_result {
        Ok(page) => apply_page(&mut outcome, &page, url),
        Err(e) => warn!("Landing page scrape failed for {}: {}", url, e),
    }

    match nav_result {
        Ok(nav) => {
            debug!(
                "Navigation: {} items, depth {}",
                nav.item_count(),
                nav.depth
            );
            outcome.navigation = nav;
        }
        Err(e) => warn!("Navigation extraction failed for {}: {}", url, e),
    }

    outcome
}

fn apply_page(outcome: &mut ContentOutcome, page: &PageScrape, url: &str) {
    let text = page.markdown.to_lowercase();

    outcome.pages_analyzed = 1 + (page.links.len() as u32).min(5);
    outcome.found_templates = has_template_signal(&text);
    outcome.signup = SignupSignals::classify(&text, &page.links);

    debug!(
        "Sign-up detection: strong={}, urlPatterns={}, weak={}, enterprise={}, result={}",
        outcome.signup.strong,
        outcome.signup.url_pattern,
        outcome.signup.weak,
        outcome.signup.enterprise_only,
        outcome.signup.has_signup()
    );

    outcome.source = Some(ExternalSource {
        name: "Product Landing Page".to_string(),
        category: SourceCategory::Product,
        data_points: outcome.pages_analyzed,
        sentiment: 0.5,
        friction_mentions: Vec::new(),
        url: url.to_string(),
        summary: format!(
            "Analyzed main landing page ({} chars, {} links)",
            page.markdown.len(),
            page.links.len()
        ),
    });

    outcome.corpus = text;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_scrape_calls(
        server: &MockServer,
        markdown: &str,
        links: Vec<&str>,
        nav_items: Vec<&str>,
    ) {
        Mock::given(method("POST"))
            .and(path("/v1/scrape"))
            .and(body_partial_json(serde_json::json!({
                "formats": ["markdown", "links"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "markdown": markdown, "links": links }
            })))
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/scrape"))
            .and(body_partial_json(serde_json::json!({
                "formats": ["extract"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "extract": {
                        "mainNavItems": nav_items,
                        "dropdownMenuItems": [],
                        "totalNavDepth": 2
                    }
                }
            })))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> ScrapeClient {
        let mut config = ProvidersConfig::default();
        config.scrape.base_url = server.uri();
        config.scrape.api_key = Some("fc-test".to_string());
        ScrapeClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn gather_combines_page_and_navigation() {
        let server = MockServer::start().await;
        mock_scrape_calls(
            &server,
            "Sign up free and use our prebuilt templates",
            vec!["https://example.com/signup", "https://example.com/pricing"],
            vec!["Product", "Pricing", "Docs"],
        )
        .await;

        let outcome = gather(&client_for(&server), "https://example.com/").await;

        assert_eq!(outcome.pages_analyzed, 3); // 1 + min(2 links, 5)
        assert!(outcome.signup.has_signup());
        assert!(outcome.found_templates);
        assert_eq!(outcome.navigation.main_nav_items.len(), 3);
        assert_eq!(outcome.navigation.depth, 2);

        let source = outcome.source.expect("landing source present");
        assert_eq!(source.category, SourceCategory::Product);
        assert_eq!(source.data_points, 3);
    }

    #[tokio::test]
    async fn gather_degrades_when_provider_is_down() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/scrape"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let outcome = gather(&client_for(&server), "https://example.com/").await;

        assert_eq!(outcome.pages_analyzed, 0);
        assert!(outcome.corpus.is_empty());
        assert!(!outcome.signup.has_signup());
        assert!(outcome.source.is_none());
        // Navigation falls back to the flat default
        assert_eq!(outcome.navigation.depth, 1);
        assert_eq!(outcome.navigation.item_count(), 0);
    }

    #[tokio::test]
    async fn page_link_cap_limits_pages_analyzed() {
        let server = MockServer::start().await;
        let links: Vec<&str> = vec![
            "https://example.com/1",
            "https://example.com/2",
            "https://example.com/3",
            "https://example.com/4",
            "https://example.com/5",
            "https://example.com/6",
            "https://example.com/7",
        ];
        mock_scrape_calls(&server, "welcome", links, vec![]).await;

        let outcome = gather(&client_for(&server), "https://example.com/").await;
        assert_eq!(outcome.pages_analyzed, 6); // 1 + cap of 5
    }
}
