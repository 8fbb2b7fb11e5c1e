//! HTTP API Request/Response Types
//!
//! JSON-serializable types for the HTTP API. Success and error bodies
//! both carry a `success` flag so clients can branch without inspecting
//! the status code.

use serde::{Deserialize, Serialize};

use crate::types::AnalysisReport;

/// Analyze request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The product URL to analyze (scheme optional)
    pub url: Option<String>,
    /// Attach intermediate scoring signals to the response
    #[serde(default)]
    pub debug: bool,
}

/// Analyze response: the report flattened under a success flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

impl AnalyzeResponse {
    pub fn new(report: AnalysisReport) -> Self {
        Self {
            success: true,
            report,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Service version
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_request_debug_defaults_off() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"url": "https://linear.app"}"#).unwrap();
        assert_eq!(request.url.as_deref(), Some("https://linear.app"));
        assert!(!request.debug);
    }

    #[test]
    fn analyze_request_tolerates_missing_url() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.url.is_none());
    }

    #[test]
    fn error_response_carries_failure_flag() {
        let value = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "nope");
    }
}
