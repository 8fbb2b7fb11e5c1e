//! HTTP API Route Definitions

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};
use super::rate_limit::{rate_limit_middleware, RateLimiter};

/// Create the API router with all routes
pub fn create_router(app_state: AppState, limiter: RateLimiter) -> Router {
    let api_v1 = Router::new()
        // Health check (never rate limited)
        .route("/health", get(handlers::health))
        .merge(
            Router::new()
                .route("/analyze", post(handlers::analyze))
                .layer(middleware::from_fn_with_state(
                    limiter,
                    rate_limit_middleware,
                )),
        )
        .with_state(app_state);

    Router::new().nest("/api/v1", api_v1)
}
