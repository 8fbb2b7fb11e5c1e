//! Core types for the friction score analyzer
//!
//! Wire-facing structs serialize in camelCase because the JSON contract
//! predates this implementation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identity derived from the validated target URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductIdentity {
    /// First dot-segment of the domain, lowercased (lookup key)
    pub raw_name: String,
    /// Properly-cased display name
    pub display_name: String,
    /// Hostname with any leading `www.` stripped
    pub domain: String,
}

/// Curated prior scores for a well-known product
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownBaseline {
    pub click_tax_base: i32,
    pub cognitive_base: i32,
    pub has_templates: bool,
    pub is_complex: bool,
}

/// Navigation structure extracted from the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationProfile {
    /// Top-level items in the header/navbar
    pub main_nav_items: Vec<String>,
    /// Sub-menu and dropdown items
    pub dropdown_items: Vec<String>,
    /// Maximum nesting level (1 = flat, 2 = dropdowns, 3+ = mega menus)
    pub depth: u32,
}

impl Default for NavigationProfile {
    fn default() -> Self {
        Self {
            main_nav_items: Vec::new(),
            dropdown_items: Vec::new(),
            depth: 1,
        }
    }
}

impl NavigationProfile {
    /// Total navigation items across both levels
    pub fn item_count(&self) -> u32 {
        (self.main_nav_items.len() + self.dropdown_items.len()) as u32
    }
}

/// Aggregate counters filled monotonically across the pipeline stages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCounts {
    pub pages_analyzed: u32,
    pub docs_found: u32,
    pub reviews_scanned: u32,
    pub reddit_threads: u32,
    pub help_articles: u32,
    pub nav_item_count: u32,
    pub nav_depth: u32,
}

impl Default for DataCounts {
    fn default() -> Self {
        Self {
            pages_analyzed: 0,
            docs_found: 0,
            reviews_scanned: 0,
            reddit_threads: 0,
            help_articles: 0,
            nav_item_count: 0,
            nav_depth: 1,
        }
    }
}

/// Category of an external data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Documentation,
    Reviews,
    Community,
    HelpCenter,
    Product,
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Documentation => "documentation",
            Self::Reviews => "reviews",
            Self::Community => "community",
            Self::HelpCenter => "help_center",
            Self::Product => "product",
        };
        f.write_str(s)
    }
}

/// One record per successfully-consulted external source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSource {
    pub name: String,
    pub category: SourceCategory,
    pub data_points: u32,
    /// Coarse sentiment in [-1, 1]
    pub sentiment: f32,
    pub friction_mentions: Vec<String>,
    pub url: String,
    pub summary: String,
}

/// Review sentiment split; the three fields always sum to exactly 100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSentiment {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Friction scores for one usage phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseScores {
    pub click_tax: u32,
    pub cognitive_load: u32,
    pub summary: String,
    pub steps: Vec<String>,
}

/// Per-phase friction breakdown
///
/// Field names are the wire names (`constant_use` stays snake_case).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseBreakdown {
    pub signup: PhaseScores,
    pub onboarding: PhaseScores,
    pub constant_use: PhaseScores,
}

/// Static description of how scores are derived
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Methodology {
    pub description: String,
    pub weights: MethodologyWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyWeights {
    pub navigation_complexity: f32,
    pub documentation_volume: f32,
    pub review_sentiment: f32,
    pub template_availability: f32,
}

impl Default for Methodology {
    fn default() -> Self {
        Self {
            description: "Scores calculated from navigation complexity, documentation volume, \
                          user reviews, and template availability."
                .to_string(),
            weights: MethodologyWeights {
                navigation_complexity: 0.3,
                documentation_volume: 0.2,
                review_sentiment: 0.25,
                template_availability: 0.25,
            },
        }
    }
}

/// Every intermediate signal used in scoring, returned when `debug: true`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub url: String,
    pub domain: String,
    pub product_name: String,
    pub known_baseline: Option<KnownBaseline>,
    pub has_templates: bool,
    pub nav_item_count: u32,
    pub nav_depth: u32,
    pub docs_found: u32,
    pub is_enterprise_product: bool,
    pub is_known_complex_product: bool,
    pub nav_complexity_count: u32,
    pub nav_simplicity_count: u32,
    pub cog_complexity_count: u32,
    pub cog_simplicity_count: u32,
    pub is_high_friction: bool,
    pub is_medium_friction: bool,
    pub documentation_score: f64,
    pub review_sentiment: ReviewSentiment,
    pub click_tax_score: u32,
    pub total_cognitive_load: u32,
    pub overall_score: u32,
    pub setup_minutes: i64,
    pub time_to_value_estimate: String,
}

/// Terminal artifact of the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub url: String,
    pub product_name: String,
    pub click_tax_score: u32,
    pub total_cognitive_load: u32,
    pub overall_score: u32,
    pub lighthouse_performance: u32,
    pub lighthouse_accessibility: u32,
    pub external_sources: Vec<ExternalSource>,
    pub documentation_score: f64,
    pub community_health_score: u32,
    pub review_sentiment: ReviewSentiment,
    pub time_to_value_estimate: String,
    pub data_counts: DataCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
    pub phases: PhaseBreakdown,
    pub recommendations: Vec<String>,
    pub methodology: Methodology,
}
