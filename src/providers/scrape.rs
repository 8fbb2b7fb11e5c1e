//! Scraping provider client
//!
//! Wraps the provider's three capabilities used by the pipeline: single-page
//! scrape (markdown + links), schema-guided navigation extraction, and site
//! mapping (link discovery up to a limit).

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ProvidersConfig;
use crate::error::ProviderError;
use crate::types::NavigationProfile;

/// Landing page scrape result
#[derive(Debug, Clone, Default)]
pub struct PageScrape {
    /// Page body as markdown
    pub markdown: String,
    /// Outbound links discovered on the page
    pub links: Vec<String>,
}

/// Client for the scraping provider
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    success: bool,
    data: Option<ScrapeData>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    markdown: Option<String>,
    links: Option<Vec<String>>,
    extract: Option<NavExtract>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavExtract {
    main_nav_items: Option<Vec<String>>,
    dropdown_menu_items: Option<Vec<String>>,
    total_nav_depth: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MapResponse {
    #[serde(default)]
    success: bool,
    links: Option<Vec<String>>,
}

impl ScrapeClient {
    /// Create a new client from the provider configuration.
    pub fn new(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;

        Ok(Self {
            http,
            base_url: config.scrape.base_url.trim_end_matches('/').to_string(),
            api_key: config.scrape.api_key.clone().unwrap_or_default(),
        })
    }

    /// Scrape a single page, returning its markdown body and outbound links.
    pub async fn scrape_page(&self, url: &str) -> Result<PageScrape, ProviderError> {
        debug!("Scraping page content for {}", url);

        let body = json!({
            "url": url,
            "formats": ["markdown", "links"],
            "onlyMainContent": true,
        });

        let response: ScrapeResponse = self.post("/v1/scrape", &body).await?;

        if !response.success {
            return Err(ProviderError::Upstream(url.to_string()));
        }

        let data = response.data.unwrap_or(ScrapeData {
            markdown: None,
            links: None,
            extract: None,
        });

        Ok(PageScrape {
            markdown: data.markdown.unwrap_or_default(),
            links: data.links.unwrap_or_default(),
        })
    }

    /// Extract the navigation structure of a page via schema-guided extraction.
    pub async fn extract_navigation(&self, url: &str) -> Result<NavigationProfile, ProviderError> {
        debug!("Extracting navigation structure for {}", url);

        let body = json!({
            "url": url,
            "formats": ["extract"],
            "extract": {
                "schema": {
                    "type": "object",
                    "properties": {
                        "mainNavItems": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Top-level main navigation menu items visible in the header/navbar",
                        },
                        "dropdownMenuItems": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "All sub-menu or dropdown items within the main navigation",
                        },
                        "totalNavDepth": {
                            "type": "number",
                            "description": "Maximum nesting levels in navigation (1=flat, 2=dropdowns, 3+=mega menus)",
                        },
                    },
                    "required": ["mainNavItems", "dropdownMenuItems", "totalNavDepth"],
                },
            },
        });

        let response: ScrapeResponse = self.post("/v1/scrape", &body).await?;

        if !response.success {
            return Err(ProviderError::Upstream(url.to_string()));
        }

        let extract = response
            .data
            .and_then(|d| d.extract)
            .ok_or_else(|| ProviderError::Malformed("missing extract payload".to_string()))?;

        Ok(NavigationProfile {
            main_nav_items: extract.main_nav_items.unwrap_or_default(),
            dropdown_items: extract.dropdown_menu_items.unwrap_or_default(),
            depth: extract.total_nav_depth.filter(|d| *d >= 1).unwrap_or(1),
        })
    }

    /// List links discovered on a site, bounded to `limit` entries.
    pub async fn map_site(&self, url: &str, limit: u32) -> Result<Vec<String>, ProviderError> {
        debug!("Mapping site {} (limit {})", url, limit);

        let body = json!({
            "url": url,
            "limit": limit,
            "includeSubdomains": false,
        });

        let response: MapResponse = self.post("/v1/map", &body).await?;

        if !response.success {
            return Err(ProviderError::Upstream(url.to_string()));
        }

        Ok(response.links.unwrap_or_default())
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}
