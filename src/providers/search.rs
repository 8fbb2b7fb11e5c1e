//! Search/LLM provider client
//!
//! Issues natural-language queries through the provider's chat completion
//! endpoint with optional domain-filtered web search, returning the answer
//! text plus citation URLs.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ProvidersConfig;
use crate::error::ProviderError;

/// Answer to one search query
#[derive(Debug, Clone, Default)]
pub struct SearchAnswer {
    /// Free-text narrative answer
    pub summary: String,
    /// URLs cited by the answer
    pub citations: Vec<String>,
}

/// Client for the search provider
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl SearchClient {
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
            base_url: config.search.base_url.trim_end_matches('/').to_string(),
            api_key: config.search.api_key.clone().unwrap_or_default(),
            model: config.search.model.clone(),
        })
    }

    /// Run one query, optionally restricting web search to specific domains.
    pub async fn query(
        &self,
        prompt: &str,
        domains: Option<&[&str]>,
    ) -> Result<SearchAnswer, ProviderError> {
        debug!("Search query ({} chars), domains: {:?}", prompt.len(), domains);

        let mut body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });
        if let Some(domains) = domains {
            body["search_domain_filter"] = json!(domains);
        }

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let summary = chat
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(SearchAnswer {
            summary,
            citations: chat.citations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SearchClient {
        let mut config = ProvidersConfig::default();
        config.search.base_url = server.uri();
        config.search.api_key = Some("pplx-test".to_string());
        SearchClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn query_parses_summary_and_citations() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "sonar",
                "search_domain_filter": ["g2.com", "capterra.com"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": "Users find it easy and intuitive." } }],
                "citations": ["https://g2.com/products/example"]
            })))
            .mount(&server)
            .await;

        let answer = client_for(&server)
            .query("Search G2 reviews for Example", Some(&["g2.com", "capterra.com"]))
            .await
            .unwrap();
        assert!(answer.summary.contains("easy"));
        assert_eq!(answer.citations.len(), 1);
    }

    #[tokio::test]
    async fn query_tolerates_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let answer = client_for(&server).query("anything", None).await.unwrap();
        assert!(answer.summary.is_empty());
        assert!(answer.citations.is_empty());
    }

    #[tokio::test]
    async fn query_errors_on_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).query("anything", None).await;
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }
}
