//! Deterministic score calculation
//!
//! Pure functions over the gathered signals. Known products score from
//! curated baselines nudged by review evidence; unknown products score
//! from structural signals. All outputs are bounded and reproducible for
//! the same inputs.

use crate::types::{
    DataCounts, KnownBaseline, PhaseBreakdown, PhaseScores, ReviewSentiment,
};

use super::signals::{
    count_hits, is_enterprise_product, is_known_complex_product, COG_COMPLEXITY_SIGNALS,
    COG_SIMPLICITY_SIGNALS, NAV_COMPLEXITY_SIGNALS, NAV_SIMPLICITY_SIGNALS,
};

/// Everything the calculator reads; nothing else influences the scores
#[derive(Debug)]
pub struct ScoreInputs<'a> {
    pub baseline: Option<KnownBaseline>,
    /// Lowercased lookup key for the complex-product list
    pub raw_name: &'a str,
    /// Accumulated lowercased text from all stages
    pub corpus: &'a str,
    pub counts: &'a DataCounts,
    pub has_templates: bool,
    pub sentiment: ReviewSentiment,
    pub documentation_score: f64,
}

/// Scores plus every intermediate signal, for the debug payload
#[derive(Debug)]
pub struct ScoreOutcome {
    pub click_tax: u32,
    pub cognitive_load: u32,
    pub overall: u32,
    pub setup_minutes: i64,
    pub time_to_value: String,
    pub phases: PhaseBreakdown,
    pub recommendations: Vec<String>,
    pub nav_complexity_count: u32,
    pub nav_simplicity_count: u32,
    pub cog_complexity_count: u32,
    pub cog_simplicity_count: u32,
    pub is_enterprise_product: bool,
    pub is_known_complex_product: bool,
    pub is_high_friction: bool,
    pub is_medium_friction: bool,
}

/// Compute all scores from the gathered signals.
pub fn calculate(inputs: &ScoreInputs<'_>) -> ScoreOutcome {
    let nav_cx = count_hits(inputs.corpus, NAV_COMPLEXITY_SIGNALS);
    let nav_sx = count_hits(inputs.corpus, NAV_SIMPLICITY_SIGNALS);
    let cog_cx = count_hits(inputs.corpus, COG_COMPLEXITY_SIGNALS);
    let cog_sx = count_hits(inputs.corpus, COG_SIMPLICITY_SIGNALS);

    let high_friction = inputs.sentiment.negative > inputs.sentiment.positive;
    let medium_friction = inputs.sentiment.neutral > 35;

    let enterprise = is_enterprise_product(inputs.corpus);
    let known_complex = is_known_complex_product(inputs.raw_name);

    let (click_tax, cognitive_load) = match inputs.baseline {
        Some(baseline) => baseline_scores(
            baseline,
            nav_cx,
            nav_sx,
            cog_cx,
            cog_sx,
            high_friction,
            medium_friction,
        ),
        None => structural_scores(
            inputs,
            nav_cx,
            nav_sx,
            cog_cx,
            cog_sx,
            high_friction,
            medium_friction,
            enterprise,
            known_complex,
        ),
    };

    let overall = (100.0 - click_tax as f64 * 0.5 - cognitive_load as f64 * 0.5)
        .round()
        .clamp(0.0, 100.0) as u32;

    let setup_minutes = setup_minutes(
        inputs.has_templates,
        known_complex,
        enterprise,
        inputs.counts.docs_found,
        click_tax,
    );
    let time_to_value = time_to_value_bucket(setup_minutes);

    let phases = phase_breakdown(click_tax, cognitive_load, high_friction, medium_friction);
    let recommendations = recommendations(
        click_tax,
        cognitive_load,
        inputs.has_templates,
        inputs.sentiment,
        inputs.documentation_score,
    );

    ScoreOutcome {
        click_tax,
        cognitive_load,
        overall,
        setup_minutes,
        time_to_value,
        phases,
        recommendations,
        nav_complexity_count: nav_cx,
        nav_simplicity_count: nav_sx,
        cog_complexity_count: cog_cx,
        cog_simplicity_count: cog_sx,
        is_enterprise_product: enterprise,
        is_known_complex_product: known_complex,
        is_high_friction: high_friction,
        is_medium_friction: medium_friction,
    }
}

/// Known products stay within a narrow band around their baseline.
fn baseline_scores(
    baseline: KnownBaseline,
    nav_cx: u32,
    nav_sx: u32,
    cog_cx: u32,
    cog_sx: u32,
    high_friction: bool,
    medium_friction: bool,
) -> (u32, u32) {
    let review_nudge = if high_friction {
        5
    } else if medium_friction {
        2
    } else {
        -3
    };

    let ct_base = baseline.click_tax_base;
    let click_tax = (ct_base + nav_cx as i32 * 3 - nav_sx as i32 * 3 + review_nudge)
        .clamp(ct_base - 10, ct_base + 15);

    let cog_base = baseline.cognitive_base;
    let cognitive = (cog_base + cog_cx as i32 * 3 - cog_sx as i32 * 3 + review_nudge)
        .clamp(cog_base - 10, cog_base + 15);

    (bound(click_tax), bound(cognitive))
}

/// Unknown products score from structural signals around a neutral 50.
#[allow(clippy::too_many_arguments)]
fn structural_scores(
    inputs: &ScoreInputs<'_>,
    nav_cx: u32,
    nav_sx: u32,
    cog_cx: u32,
    cog_sx: u32,
    high_friction: bool,
    medium_friction: bool,
    enterprise: bool,
    known_complex: bool,
) -> (u32, u32) {
    let nav_item_impact = match inputs.counts.nav_item_count {
        0..=6 => -15,
        7..=10 => 0,
        11..=15 => 15,
        _ => 25,
    };
    let nav_depth_impact = match inputs.counts.nav_depth {
        0 | 1 => -10,
        2 => 5,
        _ => 15,
    };
    let docs_impact = match inputs.counts.docs_found {
        0..=50 => -10,
        51..=150 => 0,
        151..=400 => 10,
        _ => 20,
    };
    let templates_bonus = if inputs.has_templates { -20 } else { 10 };
    let enterprise_penalty = if known_complex {
        30
    } else if enterprise {
        15
    } else {
        0
    };

    let ct_nudge = if high_friction {
        10
    } else if medium_friction {
        5
    } else {
        -5
    };
    let click_tax = 50
        + nav_item_impact
        + nav_depth_impact
        + docs_impact
        + templates_bonus
        + nav_cx as i32 * 5
        - nav_sx as i32 * 6
        + ct_nudge
        + enterprise_penalty;

    let cog_nudge = if high_friction {
        8.0
    } else if medium_friction {
        4.0
    } else {
        -5.0
    };
    let cognitive = (50.0
        + f64::from(docs_impact) * 0.5
        + f64::from(templates_bonus) * 0.5
        + f64::from(cog_cx) * 6.0
        - f64::from(cog_sx) * 7.0
        + cog_nudge
        + f64::from(enterprise_penalty) * 0.7)
        .round() as i32;

    (bound(click_tax), bound(cognitive))
}

fn bound(score: i32) -> u32 {
    score.clamp(0, 100) as u32
}

/// Minutes until a new user reaches their first real outcome.
fn setup_minutes(
    has_templates: bool,
    known_complex: bool,
    enterprise: bool,
    docs_found: u32,
    click_tax: u32,
) -> i64 {
    let mut minutes: i64 = 15;
    minutes += if has_templates { 10 } else { 60 };
    if known_complex {
        minutes *= 8;
        minutes += 480;
    } else if enterprise {
        minutes *= 2;
    }
    minutes += if docs_found > 500 {
        240
    } else if docs_found > 200 {
        60
    } else {
        0
    };
    minutes += 2 * i64::from(click_tax);
    minutes
}

/// Human-readable bucket for a minute estimate.
fn time_to_value_bucket(minutes: i64) -> String {
    if minutes < 30 {
        format!("~{minutes} min")
    } else if minutes < 60 {
        let rounded = (minutes as f64 / 5.0).round() as i64 * 5;
        format!("~{rounded} min")
    } else if minutes < 180 {
        let hours = (minutes as f64 / 60.0).round() as i64;
        format!("{}-{} hours", hours, hours + 1)
    } else if minutes < 480 {
        format!("{}+ hours", minutes / 60)
    } else if minutes < 1440 {
        let days = minutes / 480;
        format!("{}-{} days", days, days + 1)
    } else if minutes < 4320 {
        format!("{}+ days", minutes / 1440)
    } else {
        "1-2+ weeks".to_string()
    }
}

fn phase_breakdown(
    click_tax: u32,
    cognitive_load: u32,
    high_friction: bool,
    medium_friction: bool,
) -> PhaseBreakdown {
    let signup = PhaseScores {
        click_tax: if high_friction {
            6
        } else if medium_friction {
            4
        } else {
            2
        },
        cognitive_load: if high_friction {
            28
        } else if medium_friction {
            20
        } else {
            12
        },
        summary: if high_friction {
            "Complex signup process with multiple steps"
        } else if medium_friction {
            "Some friction points in signup"
        } else {
            "Straightforward signup with minimal friction"
        }
        .to_string(),
        steps: Vec::new(),
    };

    let onboarding = PhaseScores {
        click_tax: scaled(click_tax, 0.3),
        cognitive_load: scaled(cognitive_load, 0.4),
        summary: if click_tax > 70 {
            "Extensive onboarding required"
        } else if click_tax > 40 {
            "Moderate onboarding process"
        } else {
            "Quick and simple onboarding"
        }
        .to_string(),
        steps: Vec::new(),
    };

    let constant_use = PhaseScores {
        click_tax: scaled(click_tax, 0.5),
        cognitive_load: scaled(cognitive_load, 0.5),
        summary: if click_tax > 70 {
            "High ongoing complexity"
        } else if click_tax > 40 {
            "Moderate daily friction"
        } else {
            "Smooth daily usage"
        }
        .to_string(),
        steps: Vec::new(),
    };

    PhaseBreakdown {
        signup,
        onboarding,
        constant_use,
    }
}

fn scaled(score: u32, factor: f64) -> u32 {
    (f64::from(score) * factor).round() as u32
}

/// At most four recommendations, in a fixed priority order.
fn recommendations(
    click_tax: u32,
    cognitive_load: u32,
    has_templates: bool,
    sentiment: ReviewSentiment,
    documentation_score: f64,
) -> Vec<String> {
    let mut recs = Vec::new();
    if click_tax > 60 {
        recs.push(
            "Consider products with simpler navigation - current choice requires many \
             clicks to accomplish tasks"
                .to_string(),
        );
    }
    if cognitive_load > 60 {
        recs.push(
            "Interface complexity may slow down your team - look for cleaner alternatives"
                .to_string(),
        );
    }
    if !has_templates {
        recs.push(
            "No built-in templates detected - expect longer setup time or custom \
             configuration"
                .to_string(),
        );
    }
    if sentiment.negative > sentiment.positive {
        recs.push(
            "User reviews indicate friction - research common complaints before committing"
                .to_string(),
        );
    }
    if documentation_score < 50.0 {
        recs.push(
            "Documentation appears limited - support resources may be scarce".to_string(),
        );
    }
    if recs.is_empty() {
        recs.push("Product appears well-designed for ease of use".to_string());
    }
    recs.truncate(4);
    recs
}
