//! Product resolution and curated baselines
//!
//! Well-known products get a hard-coded prior score pair so one noisy scrape
//! can't swing their results; live signals only nudge within a tight band.
//! Absence from the table means "unknown product" and triggers the dynamic
//! scoring branch plus the sign-up/documentation validation gate.

use crate::types::{KnownBaseline, ProductIdentity};

/// Curated score priors keyed by lowercase product token
const KNOWN_PRODUCT_BASELINES: &[(&str, KnownBaseline)] = &[
    ("linear", baseline(20, 15, true, false)),
    ("notion", baseline(30, 25, true, false)),
    ("figma", baseline(25, 20, true, false)),
    ("slack", baseline(25, 20, false, false)),
    ("trello", baseline(20, 15, true, false)),
    ("airtable", baseline(35, 30, true, false)),
    ("miro", baseline(30, 25, true, false)),
    ("loom", baseline(15, 10, false, false)),
    ("calendly", baseline(20, 15, true, false)),
    ("salesforce", baseline(95, 90, false, true)),
    ("oracle", baseline(98, 95, false, true)),
    ("sap", baseline(98, 95, false, true)),
    ("workday", baseline(90, 85, false, true)),
    ("servicenow", baseline(88, 85, false, true)),
    ("netsuite", baseline(92, 88, false, true)),
    ("dynamics", baseline(90, 85, false, true)),
    ("hubspot", baseline(65, 60, true, false)),
    ("zendesk", baseline(55, 50, true, false)),
    ("intercom", baseline(45, 40, true, false)),
    ("asana", baseline(40, 35, true, false)),
    ("clickup", baseline(50, 55, true, false)),
    ("monday", baseline(45, 40, true, false)),
];

/// Proper casing for product names that capitalization would get wrong
const KNOWN_PRODUCT_NAMES: &[(&str, &str)] = &[
    ("salesforce", "Salesforce"),
    ("hubspot", "HubSpot"),
    ("zendesk", "Zendesk"),
    ("atlassian", "Atlassian"),
    ("monday", "Monday.com"),
    ("asana", "Asana"),
    ("clickup", "ClickUp"),
    ("notion", "Notion"),
    ("airtable", "Airtable"),
    ("figma", "Figma"),
    ("linear", "Linear"),
    ("slack", "Slack"),
    ("intercom", "Intercom"),
    ("stripe", "Stripe"),
    ("shopify", "Shopify"),
    ("webflow", "Webflow"),
    ("mailchimp", "Mailchimp"),
    ("calendly", "Calendly"),
    ("zoom", "Zoom"),
    ("miro", "Miro"),
    ("loom", "Loom"),
    ("dropbox", "Dropbox"),
    ("trello", "Trello"),
    ("servicenow", "ServiceNow"),
    ("workday", "Workday"),
    ("oracle", "Oracle"),
    ("sap", "SAP"),
    ("netsuite", "NetSuite"),
    ("dynamics", "Dynamics 365"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
];

const fn baseline(
    click_tax_base: i32,
    cognitive_base: i32,
    has_templates: bool,
    is_complex: bool,
) -> KnownBaseline {
    KnownBaseline {
        click_tax_base,
        cognitive_base,
        has_templates,
        is_complex,
    }
}

/// Derive the product identity from a validated domain.
pub fn resolve_product(domain: &str) -> ProductIdentity {
    let raw_name = domain
        .split('.')
        .next()
        .unwrap_or(domain)
        .to_lowercase();

    let display_name = KNOWN_PRODUCT_NAMES
        .iter()
        .find(|(key, _)| *key == raw_name)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| capitalize(&raw_name));

    ProductIdentity {
        raw_name,
        display_name,
        domain: domain.to_string(),
    }
}

/// Look up the curated baseline for a product token.
pub fn baseline_for(raw_name: &str) -> Option<KnownBaseline> {
    KNOWN_PRODUCT_BASELINES
        .iter()
        .find(|(key, _)| *key == raw_name)
        .map(|(_, b)| *b)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_product_casing() {
        let product = resolve_product("clickup.com");
        assert_eq!(product.raw_name, "clickup");
        assert_eq!(product.display_name, "ClickUp");
        assert_eq!(product.domain, "clickup.com");
    }

    #[test]
    fn falls_back_to_capitalized_token() {
        let product = resolve_product("acmewidgets.io");
        assert_eq!(product.raw_name, "acmewidgets");
        assert_eq!(product.display_name, "Acmewidgets");
    }

    #[test]
    fn raw_name_is_first_dot_segment() {
        let product = resolve_product("linear.app");
        assert_eq!(product.raw_name, "linear");
    }

    #[test]
    fn baseline_lookup_hits_known_products() {
        let b = baseline_for("linear").expect("linear has a baseline");
        assert_eq!(b.click_tax_base, 20);
        assert_eq!(b.cognitive_base, 15);
        assert!(b.has_templates);
        assert!(!b.is_complex);

        let b = baseline_for("sap").expect("sap has a baseline");
        assert_eq!(b.click_tax_base, 98);
        assert!(b.is_complex);
    }

    #[test]
    fn baseline_lookup_misses_unknown_products() {
        assert!(baseline_for("acmewidgets").is_none());
        // Name-table-only products have no baseline
        assert!(baseline_for("github").is_none());
        assert!(baseline_for("stripe").is_none());
    }

    #[test]
    fn all_baselines_are_within_bounds() {
        for (name, b) in KNOWN_PRODUCT_BASELINES {
            assert!(
                (0..=100).contains(&b.click_tax_base),
                "{} click tax base out of range",
                name
            );
            assert!(
                (0..=100).contains(&b.cognitive_base),
                "{} cognitive base out of range",
                name
            );
        }
    }
}
