//! Keyword tables and heuristic text signals
//!
//! All extraction here is intentionally approximate: lowercase substring
//! matching against small hand-tuned lists. The thresholds were tuned against
//! observed products, so the lists and precedence rules are preserved as-is
//! rather than "improved".

use crate::types::ReviewSentiment;

/// Phrases indicating prebuilt templates / quick setup
pub const TEMPLATE_SIGNALS: &[&str] = &[
    "templates",
    "template",
    "quick start",
    "quickstart",
    "prebuilt",
    "out of the box",
    "starter kit",
    "one-click setup",
    "instant setup",
    "pre-configured",
    "ready to use",
    "get started in minutes",
    "no-code",
    "drag and drop",
    "plug and play",
    "turnkey",
];

/// Definitive evidence of self-serve signup
pub const STRONG_SELF_SERVE_SIGNALS: &[&str] = &[
    "sign up",
    "signup",
    "free trial",
    "create account",
    "register",
    "start your free trial",
    "create your account",
    "sign up free",
    "create free account",
    "start free trial",
    "try for free",
    "start your free",
    "get started free",
    "start for free",
    "sign up now",
    "register free",
    "join free",
    "try it free",
];

/// Link path fragments that imply a self-serve flow
pub const SELF_SERVE_URL_PATTERNS: &[&str] = &[
    "/signup",
    "/sign-up",
    "/register",
    "/create-account",
    "/trial",
    "/free-trial",
    "/get-started",
    "/start",
    "/join",
    "/onboarding",
    "/try",
];

/// Generic CTAs; only count when no enterprise-only phrase is present
pub const WEAK_SELF_SERVE_SIGNALS: &[&str] = &[
    "get started",
    "start now",
    "try free",
    "start building",
    "join waitlist",
    "get access",
    "try our",
];

/// Contact-sales language, the counter-signal for weak CTAs
pub const ENTERPRISE_ONLY_SIGNALS: &[&str] = &[
    "request pricing",
    "contact sales",
    "book a demo",
    "schedule demo",
    "talk to sales",
    "request a demo",
    "get a quote",
    "request quote",
    "contact us for pricing",
    "enterprise pricing",
    "sales team",
    "speak to sales",
    "schedule a call",
    "book a call",
    "get in touch",
    "request a consultation",
    "schedule a meeting",
    "talk to an expert",
];

/// Positive review vocabulary
pub const POSITIVE_WORDS: &[&str] = &[
    "easy",
    "intuitive",
    "simple",
    "quick",
    "great",
    "love",
    "smooth",
    "straightforward",
];

/// Negative review vocabulary
pub const NEGATIVE_WORDS: &[&str] = &[
    "difficult",
    "confusing",
    "complex",
    "slow",
    "frustrating",
    "hard",
    "steep learning",
    "overwhelming",
];

/// Navigation friction complaints
pub const NAV_COMPLEXITY_SIGNALS: &[&str] = &[
    "hard to find",
    "buried in menus",
    "too many clicks",
    "confusing menu",
    "hidden feature",
    "settings maze",
    "endless clicks",
    "too many steps",
];

/// Navigation praise
pub const NAV_SIMPLICITY_SIGNALS: &[&str] = &[
    "easy to navigate",
    "intuitive",
    "well organized",
    "minimal clicks",
    "streamlined",
    "one-click",
    "easy access",
    "simple navigation",
];

/// Interface overload complaints
pub const COG_COMPLEXITY_SIGNALS: &[&str] = &[
    "overwhelming",
    "cluttered",
    "too many options",
    "steep learning",
    "information overload",
];

/// Interface simplicity praise
pub const COG_SIMPLICITY_SIGNALS: &[&str] = &[
    "clean interface",
    "minimalist",
    "simple ui",
    "easy on the eyes",
    "beginner friendly",
];

/// Link path fragments that identify documentation pages
pub const DOC_PATH_PATTERNS: &[&str] = &[
    "/docs",
    "/help",
    "/guide",
    "/support",
    "/learn",
    "/tutorial",
    "/kb",
    "/knowledge",
    "/articles",
    "/faq",
    "/academy",
    "/resources",
];

/// Products whose deployments are known to be heavyweight
pub const KNOWN_COMPLEX_PRODUCTS: &[&str] = &[
    "salesforce",
    "oracle",
    "sap",
    "workday",
    "servicenow",
    "netsuite",
    "dynamics",
];

/// Count how many phrases from `signals` occur in `text` (text must be lowercase)
pub fn count_hits(text: &str, signals: &[&str]) -> u32 {
    signals.iter().filter(|s| text.contains(*s)).count() as u32
}

/// Whether any template phrase occurs in `text` (text must be lowercase)
pub fn has_template_signal(text: &str) -> bool {
    TEMPLATE_SIGNALS.iter().any(|s| text.contains(s))
}

/// Tiered sign-up evidence gathered from page text and outbound links
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupSignals {
    pub strong: bool,
    pub url_pattern: bool,
    pub weak: bool,
    pub enterprise_only: bool,
}

impl SignupSignals {
    /// Classify sign-up evidence from lowercased page text and links.
    pub fn classify(page_text: &str, links: &[String]) -> Self {
        let all_links = links
            .iter()
            .map(|l| l.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            strong: STRONG_SELF_SERVE_SIGNALS.iter().any(|s| page_text.contains(s)),
            url_pattern: SELF_SERVE_URL_PATTERNS.iter().any(|p| all_links.contains(p)),
            weak: WEAK_SELF_SERVE_SIGNALS.iter().any(|s| page_text.contains(s)),
            enterprise_only: ENTERPRISE_ONLY_SIGNALS.iter().any(|s| page_text.contains(s)),
        }
    }

    /// Resolve the tiers into a single verdict.
    ///
    /// Precedence: strong > url-pattern > weak-unless-enterprise. Generic CTAs
    /// are ambiguous, so they only count when no contact-sales language
    /// coexists with them.
    pub fn has_signup(&self) -> bool {
        self.strong || self.url_pattern || (self.weak && !self.enterprise_only)
    }
}

/// Whether the corpus reads like an enterprise product pitch
pub fn is_enterprise_product(text: &str) -> bool {
    ["enterprise", "crm", "erp"].iter().any(|k| {
        text.contains(&format!("{} software", k)) || text.contains(&format!("{} solution", k))
    })
}

/// Whether the product token matches a known heavyweight deployment
pub fn is_known_complex_product(raw_name: &str) -> bool {
    KNOWN_COMPLEX_PRODUCTS.iter().any(|p| raw_name.contains(p))
}

/// Derive the review sentiment split from review text keyword counts.
///
/// Floor/ceiling formula: each bucket gets a base share (20/25/10) plus a
/// share proportional to its keyword count, then the three are renormalized
/// so they sum to exactly 100, with the rounding remainder assigned to
/// `negative`.
pub fn sentiment_split(review_text: &str) -> ReviewSentiment {
    let positive_count = count_hits(review_text, POSITIVE_WORDS) as f64;
    let negative_count = count_hits(review_text, NEGATIVE_WORDS) as f64;
    let total = (positive_count + negative_count).max(1.0);

    let positive = (positive_count / total * 60.0).round() + 20.0;
    let neutral = 25.0;
    let negative = (negative_count / total * 40.0).round() + 10.0;

    let sum = positive + neutral + negative;
    let positive = (positive / sum * 100.0).round() as u32;
    let neutral = (neutral / sum * 100.0).round() as u32;
    let negative = 100 - positive - neutral;

    ReviewSentiment {
        positive,
        neutral,
        negative,
    }
}
