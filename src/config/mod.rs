//! Configuration for the friction score analyzer

mod logging;
mod providers;
mod server;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use providers::{ProvidersConfig, ScrapeProviderConfig, SearchProviderConfig};
pub use server::{RateLimitConfig, ServerConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default user agent for all provider requests
pub const DEFAULT_USER_AGENT: &str = "FrictionScoreBot/0.1 (+https://frictionscore.dev)";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// External provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// After deserializing, validates all fields and resolves missing
    /// provider API keys from the environment.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;
        config.validate()?;
        config.providers.resolve_env();
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects every problem and reports them together in one error.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        // Server validation
        if self.server.listen_addr.is_empty() {
            errors.push("listen_addr must not be empty".to_string());
        } else if let Some(port_str) = self.server.listen_addr.rsplit(':').next() {
            if let Ok(port) = port_str.parse::<u32>() {
                if port == 0 || port > 65535 {
                    errors.push(format!(
                        "listen port must be between 1 and 65535, got {}",
                        port
                    ));
                }
            }
        }

        // Rate limit validation
        if self.server.rate_limit.max_requests == 0 {
            errors.push("rate_limit max_requests must be positive".to_string());
        }
        if self.server.rate_limit.window_secs == 0 {
            errors.push("rate_limit window_secs must be positive".to_string());
        }

        // Provider validation
        if self.providers.scrape.base_url.is_empty() {
            errors.push("scrape provider base_url must not be empty".to_string());
        }
        if self.providers.search.base_url.is_empty() {
            errors.push("search provider base_url must not be empty".to_string());
        }
        if self.providers.search.model.is_empty() {
            errors.push("search provider model must not be empty".to_string());
        }
        if self.providers.timeout_secs == 0 {
            errors.push("provider timeout_secs must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}
