//! HTTP API Server Module
//!
//! Provides the REST API for the friction score analyzer. Rate limiting
//! is applied per client to the analyze route only.

pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod server;
pub mod types;

pub use server::HttpServer;
