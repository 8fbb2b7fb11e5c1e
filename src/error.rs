//! Error types for the analysis pipeline and provider clients

use thiserror::Error;

/// Terminal errors surfaced to the caller of an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Malformed, oversized, or schemeless input URL
    #[error("{0}")]
    InvalidInput(String),

    /// Private/internal address or metadata endpoint
    #[error("{0}")]
    ForbiddenTarget(String),

    /// Unknown product lacking sign-up and/or documentation evidence
    #[error("{0}")]
    ValidationFailed(String),

    /// Upstream provider API keys are not configured
    #[error("API connectors not configured")]
    MissingCredentials,

    /// Anything else
    #[error("Analysis failed: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Whether this error is the caller's fault (maps to HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::ForbiddenTarget(_) | Self::ValidationFailed(_)
        )
    }
}

/// Errors from the external scraping/search providers
///
/// Never surfaced to the caller: every stage degrades a provider failure
/// into an empty default so one flaky upstream cannot abort the analysis.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider reported failure for {0}")]
    Upstream(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
