//! FrictionScore: Onboarding Friction Analyzer for SaaS Products
//!
//! Estimates how much friction a self-serve SaaS product imposes on new
//! users, combining:
//! - Landing page scraping and navigation extraction
//! - Documentation surface mapping across common doc subdomains
//! - Review, Reddit, and help center evidence via web search
//! - Curated baselines for well-known products
//! - Deterministic, bounded scoring with per-phase breakdowns

pub mod analysis;
pub mod config;
pub mod error;
pub mod http;
pub mod providers;
pub mod types;

pub use analysis::AnalysisPipeline;
pub use config::Config;
pub use error::{AnalysisError, ProviderError};
pub use types::AnalysisReport;
