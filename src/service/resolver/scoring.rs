//! Rule eligibility and per-rule scoring
//!
//! 1. Gate: cabin, airline (code OR name) and required markers (any one)
//! 2. Score: baseline + aircraft anchor + keyword anchor + marker bonuses
//! 3. Mixed-fleet penalty when a corroboration-only rule lacks its keyword

use crate::model::{
    Candidate, EvidenceBundle, FeatureMarkers, ProductRule, ScoringWeights, SeatProduct,
};
use crate::service::normalize::{normalize_aircraft, normalize_airline_code};

pub const REASON_AIRLINE: &str = "Airline match";
pub const REASON_AIRCRAFT_MISMATCH: &str = "Aircraft not matching";
pub const REASON_AIRCRAFT_MISSING: &str = "Aircraft missing";
pub const REASON_KEYWORD: &str = "Product keyword found";
pub const REASON_MARKERS: &str = "Cabin features detected (lie-flat/suite/door)";
pub const REASON_MIXED_FLEET: &str = "Mixed-fleet risk: seat map/keyword recommended";

/// Lowercase and collapse whitespace runs to one space
pub(crate) fn fold(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = fold(needle);
    !needle.is_empty() && fold(haystack).contains(&needle)
}

/// Can this rule describe the observed flight at all?
pub fn is_eligible(rule: &ProductRule, evidence: &EvidenceBundle) -> bool {
    rule.cabin.matches(evidence.cabin)
        && airline_matches(rule, evidence)
        && markers_gate(rule, &evidence.markers)
}

/// Code and name are independent anchors; either one is enough
pub fn airline_matches(rule: &ProductRule, evidence: &EvidenceBundle) -> bool {
    let code_ok = evidence.airline_iata.as_deref().is_some_and(|code| {
        let code = normalize_airline_code(code);
        !code.is_empty() && code == normalize_airline_code(&rule.airline_iata)
    });

    let name_ok = evidence
        .airline_name
        .as_deref()
        .is_some_and(|name| contains_folded(name, &rule.airline_name));

    code_ok || name_ok
}

fn markers_gate(rule: &ProductRule, markers: &FeatureMarkers) -> bool {
    rule.require_markers_any.is_empty()
        || rule
            .require_markers_any
            .iter()
            .any(|marker| markers.is_set(*marker))
}

/// Whitelist tokens are matched against both the canonical family and the raw
/// observation, so "A359" hits an "A350-900" rule and "77W" text hits "77W"
pub fn aircraft_matches(observed: &str, aircraft_in: &[String]) -> bool {
    let canonical = fold(&normalize_aircraft(observed));
    let raw = fold(observed);
    aircraft_in.iter().any(|token| {
        let token = fold(token);
        !token.is_empty() && (canonical.contains(&token) || raw.contains(&token))
    })
}

pub fn keyword_matches(corpus: &str, product_names: &[String]) -> bool {
    let corpus = fold(corpus);
    product_names.iter().any(|name| {
        let name = fold(name);
        !name.is_empty() && corpus.contains(&name)
    })
}

/// Score one eligible rule against the evidence
pub fn score_rule(
    rule: &ProductRule,
    evidence: &EvidenceBundle,
    weights: &ScoringWeights,
) -> Candidate {
    let mut score = weights.baseline;
    let mut reasons = vec![REASON_AIRLINE.to_string()];

    match evidence.aircraft() {
        Some(observed) if aircraft_matches(observed, &rule.aircraft_in) => {
            score += weights.aircraft_anchor;
            reasons.push(format!("Aircraft matches ({})", observed));
        }
        Some(_) => reasons.push(REASON_AIRCRAFT_MISMATCH.to_string()),
        None => reasons.push(REASON_AIRCRAFT_MISSING.to_string()),
    }

    let keyword_confirmed = keyword_matches(&evidence.text_corpus(), &rule.product_names);
    if keyword_confirmed {
        score += weights.keyword_anchor;
        reasons.push(REASON_KEYWORD.to_string());
    }

    let marker_boost = weights.marker_bonus(&evidence.markers);
    if marker_boost > 0.0 {
        score += marker_boost;
        reasons.push(REASON_MARKERS.to_string());
    }

    let mixed_fleet_penalized = rule.requires_corroboration && !keyword_confirmed;
    if mixed_fleet_penalized {
        score -= weights.mixed_fleet_penalty;
        reasons.push(REASON_MIXED_FLEET.to_string());
    }

    Candidate {
        product: SeatProduct::from(rule),
        score: score.clamp(0.0, 1.0),
        reasons,
        keyword_confirmed,
        mixed_fleet_penalized,
    }
}
