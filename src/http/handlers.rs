//! HTTP API Request Handlers
//!
//! Handlers that map HTTP requests to analysis pipeline operations.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, error};

use crate::analysis::AnalysisPipeline;

use super::types::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Analyze endpoint
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let url = match request.url {
        Some(url) => url,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("URL is required")),
            )
                .into_response();
        }
    };

    debug!("HTTP analyze request: url={}, debug={}", url, request.debug);

    match state.pipeline.analyze(&url, request.debug).await {
        Ok(report) => (StatusCode::OK, Json(AnalyzeResponse::new(report))).into_response(),
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                error!("Analysis failed for {}: {}", url, e);
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}
