//! HTTP API Rate Limiting Middleware
//!
//! Fixed-window per-client limiter keyed by the caller's address. State
//! is process-local; each server instance enforces its own window.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use parking_lot::Mutex;
use tracing::warn;

use crate::config::RateLimitConfig;

use super::types::ErrorResponse;

struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// Decision for one request against the limiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

/// Shared fixed-window rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Arc<Mutex<HashMap<String, WindowEntry>>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Consume one request slot for `client`, opening a fresh window if
    /// the previous one expired.
    pub fn check_and_consume(&self, client: &str) -> RateDecision {
        let now = Instant::now();
        let mut windows = self.windows.lock();

        let entry = windows.entry(client.to_string()).or_insert(WindowEntry {
            count: 0,
            reset_at: now + self.window,
        });

        if now >= entry.reset_at {
            entry.count = 0;
            entry.reset_at = now + self.window;
        }

        if entry.count >= self.max_requests {
            return RateDecision::Limited {
                retry_after: entry.reset_at.saturating_duration_since(now),
            };
        }

        entry.count += 1;
        RateDecision::Allowed {
            remaining: self.max_requests - entry.count,
        }
    }
}

/// Best-effort client address from proxy headers.
fn client_address(request: &Request<Body>) -> String {
    let headers = request.headers();
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|h| h.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    if let Some(real_ip) = headers.get("x-real-ip").and_then(|h| h.to_str().ok()) {
        return real_ip.trim().to_string();
    }
    "unknown".to_string()
}

/// Rate limiting middleware
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let client = client_address(&request);

    match limiter.check_and_consume(&client) {
        RateDecision::Allowed { .. } => next.run(request).await,
        RateDecision::Limited { retry_after } => {
            warn!("Rate limit hit for client {}", client);
            let reset_secs = retry_after.as_secs_f64().ceil() as u64;
            let minutes = (retry_after.as_secs_f64() / 60.0).ceil().max(1.0) as u64;
            let plural = if minutes == 1 { "" } else { "s" };
            let body = ErrorResponse::new(format!(
                "Rate limit exceeded. Please try again in {minutes} minute{plural}."
            ));
            (
                StatusCode::TOO_MANY_REQUESTS,
                [
                    ("X-RateLimit-Remaining", "0".to_string()),
                    ("X-RateLimit-Reset", reset_secs.to_string()),
                ],
                Json(body),
            )
                .into_response()
        }
    }
}
