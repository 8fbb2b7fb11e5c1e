//! External provider configuration
//!
//! Two upstream services are consulted: a scraping provider (page scrape,
//! structured extraction, site mapping) and a search/LLM provider (web search
//! with citations). API keys can come from the config file or the
//! `FIRECRAWL_API_KEY` / `PERPLEXITY_API_KEY` environment variables.

use serde::{Deserialize, Serialize};

use super::DEFAULT_USER_AGENT;

/// Configuration for both upstream providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Scraping provider (content, navigation extraction, site maps)
    #[serde(default)]
    pub scrape: ScrapeProviderConfig,
    /// Search/LLM provider (reviews, community, help center)
    #[serde(default)]
    pub search: SearchProviderConfig,
    /// Request timeout for provider calls (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout for provider calls (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// User agent sent on provider requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            scrape: ScrapeProviderConfig::default(),
            search: SearchProviderConfig::default(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ProvidersConfig {
    /// Fill missing API keys from the environment.
    pub fn resolve_env(&mut self) {
        if self.scrape.api_key.is_none() {
            if let Ok(key) = std::env::var("FIRECRAWL_API_KEY") {
                if !key.is_empty() {
                    self.scrape.api_key = Some(key);
                }
            }
        }
        if self.search.api_key.is_none() {
            if let Ok(key) = std::env::var("PERPLEXITY_API_KEY") {
                if !key.is_empty() {
                    self.search.api_key = Some(key);
                }
            }
        }
    }

    /// Whether both provider keys are present
    pub fn has_credentials(&self) -> bool {
        self.scrape.api_key.is_some() && self.search.api_key.is_some()
    }
}

/// Scraping provider endpoint and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeProviderConfig {
    /// Base URL of the scraping API
    #[serde(default = "default_scrape_base_url")]
    pub base_url: String,
    /// API key (falls back to `FIRECRAWL_API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_scrape_base_url() -> String {
    "https://api.firecrawl.dev".to_string()
}

impl Default for ScrapeProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_scrape_base_url(),
            api_key: None,
        }
    }
}

/// Search/LLM provider endpoint and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProviderConfig {
    /// Base URL of the search API
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
    /// API key (falls back to `PERPLEXITY_API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name for chat completions
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_search_base_url() -> String {
    "https://api.perplexity.ai".to_string()
}

fn default_model() -> String {
    "sonar".to_string()
}

impl Default for SearchProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            api_key: None,
            model: default_model(),
        }
    }
}
