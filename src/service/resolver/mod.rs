//! Seat product resolver
//!
//! Scores an evidence bundle against every rule of the injected catalog and
//! turns the best candidate into a status, a confidence and, when the evidence
//! is too thin, a hint for the next screenshot.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::model::{
    Cabin, Candidate, EvidenceBundle, Resolution, ResolveStatus, ScoringWeights, SeatProduct,
};
use crate::service::catalog::RuleCatalog;
use crate::service::normalize::normalize_airline_code;

pub mod scoring;
pub mod status;

pub use scoring::{is_eligible, score_rule};
pub use status::classify;

pub const NEXT_SCREENSHOT_HINT: &str = "Open Flight details in Google Flights and retake the screenshot including the aircraft type line (A350-900 / 777-300ER). If available, include the seat map and any 'lie-flat / suite / door' wording.";

const SEATMAPS_AIRLINES_URL: &str = "https://seatmaps.com/airlines";

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

pub struct SeatResolver {
    catalog: Arc<RuleCatalog>,
    weights: ScoringWeights,
}

impl SeatResolver {
    pub fn new(catalog: Arc<RuleCatalog>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Resolve the evidence to a seat product. Never fails: thin evidence is
    /// reported as `needs_more_info`.
    pub fn resolve(&self, evidence: &EvidenceBundle) -> Resolution {
        if evidence.cabin == Cabin::Unknown {
            let resolution = self.unresolved(evidence, self.weights.unknown_cabin_confidence);
            tracing::debug!(
                status = ?resolution.status,
                confidence = resolution.confidence,
                "Cabin not observed, skipping rule scoring"
            );
            return resolution;
        }

        let mut candidates = self.rank(evidence);

        let Some(best) = candidates.first() else {
            let resolution = self.unresolved(evidence, self.weights.no_match_confidence);
            tracing::debug!(
                status = ?resolution.status,
                confidence = resolution.confidence,
                cabin = evidence.cabin.as_str(),
                "No eligible product rule"
            );
            return resolution;
        };

        let status = classify(best, evidence, &self.weights);
        let confidence = best.score;
        let seat_product = best.product.clone();

        let eligible = candidates.len();
        candidates.truncate(self.weights.max_candidates);

        tracing::debug!(
            status = ?status,
            confidence,
            top = %seat_product.id,
            eligible,
            "Resolved seat product"
        );

        Resolution {
            status,
            confidence,
            seat_product,
            candidates,
            next_screenshot_hint: hint_for(status),
        }
    }

    /// Eligible rules scored and sorted by descending score. The sort is
    /// stable, so equal scores keep catalog order.
    pub fn rank(&self, evidence: &EvidenceBundle) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self
            .catalog
            .iter()
            .filter(|rule| is_eligible(rule, evidence))
            .map(|rule| score_rule(rule, evidence, &self.weights))
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }

    fn unresolved(&self, evidence: &EvidenceBundle, confidence: f64) -> Resolution {
        Resolution {
            status: ResolveStatus::NeedsMoreInfo,
            confidence,
            seat_product: SeatProduct::unknown(seatmaps_fallback_url(evidence)),
            candidates: Vec::new(),
            next_screenshot_hint: NEXT_SCREENSHOT_HINT.to_string(),
        }
    }
}

fn hint_for(status: ResolveStatus) -> String {
    match status {
        ResolveStatus::NeedsMoreInfo => NEXT_SCREENSHOT_HINT.to_string(),
        ResolveStatus::Confirmed | ResolveStatus::Likely => String::new(),
    }
}

/// Airline landing page on seatmaps.com, derived from the observed code and name
pub fn seatmaps_fallback_url(evidence: &EvidenceBundle) -> Option<String> {
    let code = normalize_airline_code(evidence.airline_iata.as_deref()?).to_lowercase();
    if code.is_empty() {
        return None;
    }

    let slug = evidence
        .airline_name
        .as_deref()
        .map(slugify)
        .unwrap_or_default();

    if slug.is_empty() {
        Some(format!("{}/{}/", SEATMAPS_AIRLINES_URL, code))
    } else {
        Some(format!("{}/{}-{}/", SEATMAPS_AIRLINES_URL, code, slug))
    }
}

fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    SLUG_SEPARATORS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureMarkers, Marker, ProductRule, RuleCabin};

    fn resolver() -> SeatResolver {
        SeatResolver::new(Arc::new(RuleCatalog::builtin()), ScoringWeights::default())
    }

    fn lie_flat() -> FeatureMarkers {
        FeatureMarkers {
            lie_flat: true,
            ..Default::default()
        }
    }

    fn rule(id: &str, corroborate: bool) -> ProductRule {
        ProductRule {
            id: id.to_string(),
            airline_iata: "ZZ".to_string(),
            airline_name: "Zulu Air".to_string(),
            cabin: RuleCabin::Business,
            aircraft_in: vec!["787-9".to_string()],
            product_names: vec!["Zephyr".to_string()],
            notes: None,
            seatmaps_airline_url: None,
            image_url: None,
            require_markers_any: Vec::new(),
            requires_corroboration: corroborate,
        }
    }

    fn zulu(aircraft: Option<&str>, text: Option<&str>) -> EvidenceBundle {
        EvidenceBundle {
            airline_iata: Some("ZZ".to_string()),
            cabin: Cabin::Business,
            aircraft_type: aircraft.map(str::to_string),
            raw_text: text.map(str::to_string),
            ..Default::default()
        }
    }

    fn custom(rules: Vec<ProductRule>) -> SeatResolver {
        SeatResolver::new(Arc::new(RuleCatalog::new(rules)), ScoringWeights::default())
    }

    #[test]
    fn test_scenario_keyword_aircraft_and_marker_confirm() {
        let evidence = EvidenceBundle {
            airline_iata: Some("LH".to_string()),
            cabin: Cabin::Business,
            aircraft_type: Some("A359".to_string()),
            raw_text: Some("Lufthansa Allegris business".to_string()),
            markers: lie_flat(),
            ..Default::default()
        };

        let resolution = resolver().resolve(&evidence);

        assert_eq!(resolution.status, ResolveStatus::Confirmed);
        assert_eq!(resolution.seat_product.name, "Allegris");
        assert_eq!(resolution.seat_product.id, "LH_ALLEGRIS_J_A359");
        assert!(resolution.confidence >= 0.78);
        assert!(resolution.candidates[0].keyword_confirmed);
        assert!(
            resolution.candidates[0]
                .reasons
                .contains(&"Aircraft matches (A359)".to_string())
        );
        assert!(resolution.next_screenshot_hint.is_empty());
    }

    #[test]
    fn test_scenario_name_only_evidence_needs_more_info() {
        let evidence = EvidenceBundle {
            airline_name: Some("Qatar Airways".to_string()),
            cabin: Cabin::Business,
            ..Default::default()
        };

        let resolution = resolver().resolve(&evidence);

        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
        assert_eq!(resolution.next_screenshot_hint, NEXT_SCREENSHOT_HINT);
        assert!(resolution.seat_product.is_unknown());
    }

    #[test]
    fn test_scenario_name_only_with_ungated_rule_is_forced_down() {
        let mut qatar = rule("QR_ANY_J", true);
        qatar.airline_iata = "QR".to_string();
        qatar.airline_name = "Qatar Airways".to_string();
        let evidence = EvidenceBundle {
            airline_name: Some("Qatar Airways".to_string()),
            cabin: Cabin::Business,
            ..Default::default()
        };

        let resolution = custom(vec![qatar]).resolve(&evidence);

        assert_eq!(resolution.candidates.len(), 1);
        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
        assert_eq!(resolution.seat_product.id, "QR_ANY_J");
    }

    #[test]
    fn test_scenario_mixed_fleet_without_keyword() {
        let evidence = EvidenceBundle {
            airline_iata: Some("BA".to_string()),
            cabin: Cabin::Business,
            aircraft_type: Some("777-300ER".to_string()),
            raw_text: Some(String::new()),
            markers: lie_flat(),
            ..Default::default()
        };

        let resolution = resolver().resolve(&evidence);

        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
        assert!((resolution.confidence - 0.48).abs() < 1e-9);
        assert_eq!(resolution.seat_product.id, "BA_CLUB_SUITE_J");
        assert!(resolution.candidates[0].mixed_fleet_penalized);
    }

    #[test]
    fn test_unknown_cabin_short_circuits() {
        let evidence = EvidenceBundle {
            airline_iata: Some("LH".to_string()),
            airline_name: Some("Lufthansa".to_string()),
            aircraft_type: Some("A350-900".to_string()),
            raw_text: Some("Allegris".to_string()),
            markers: lie_flat(),
            ..Default::default()
        };

        let resolution = resolver().resolve(&evidence);

        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
        assert_eq!(resolution.confidence, 0.3);
        assert!(resolution.candidates.is_empty());
        assert!(!resolution.next_screenshot_hint.is_empty());
        assert_eq!(
            resolution.seat_product.seatmaps_airline_url.as_deref(),
            Some("https://seatmaps.com/airlines/lh-lufthansa/")
        );
    }

    #[test]
    fn test_no_eligible_rule() {
        let evidence = EvidenceBundle {
            airline_iata: Some("XX".to_string()),
            cabin: Cabin::First,
            ..Default::default()
        };

        let resolution = resolver().resolve(&evidence);

        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
        assert_eq!(resolution.confidence, 0.35);
        assert!(resolution.candidates.is_empty());
        assert_eq!(
            resolution.seat_product.seatmaps_airline_url.as_deref(),
            Some("https://seatmaps.com/airlines/xx/")
        );
    }

    #[test]
    fn test_keyword_dominance() {
        let resolver = custom(vec![rule("ZZ_ZEPHYR_J", false)]);

        // Mismatched aircraft keeps both scores below the clamp
        let without = resolver.resolve(&zulu(Some("A380"), Some("business cabin")));
        let with = resolver.resolve(&zulu(Some("A380"), Some("new Zephyr business cabin")));

        assert!(with.confidence - without.confidence >= 0.60 - 1e-9);
        assert_eq!(without.status, ResolveStatus::NeedsMoreInfo);
        assert_eq!(with.status, ResolveStatus::Confirmed);
    }

    #[test]
    fn test_mixed_fleet_caution() {
        let resolver = custom(vec![rule("ZZ_ZEPHYR_J", true)]);
        let mut plain = zulu(Some("787-9"), None);
        plain.markers = FeatureMarkers {
            lie_flat: true,
            suite: true,
            door: true,
            direct_aisle_access: true,
        };
        let mut keyword = plain.clone();
        keyword.raw_text = Some("Zephyr".to_string());

        let plain_candidate = &resolver.rank(&plain)[0];
        let keyword_candidate = &resolver.rank(&keyword)[0];

        // 0.35 + 0.25 + 0.26 - 0.20 vs 0.35 + 0.25 + 0.60 + 0.26 (clamped)
        assert!(keyword_candidate.score - plain_candidate.score >= 0.20 - 1e-9);
        assert_ne!(resolver.resolve(&plain).status, ResolveStatus::Confirmed);
        assert_eq!(resolver.resolve(&keyword).status, ResolveStatus::Confirmed);
    }

    #[test]
    fn test_no_aircraft_conservatism() {
        let weights = ScoringWeights {
            baseline: 0.9,
            ..Default::default()
        };
        let resolver = SeatResolver::new(
            Arc::new(RuleCatalog::new(vec![rule("ZZ_ZEPHYR_J", false)])),
            weights,
        );
        let mut evidence = zulu(None, Some("business"));
        evidence.markers = FeatureMarkers {
            door: true,
            direct_aisle_access: true,
            ..Default::default()
        };

        let resolution = resolver.resolve(&evidence);

        assert_eq!(resolution.candidates.len(), 1);
        assert_eq!(resolution.confidence, 1.0);
        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
    }

    #[test]
    fn test_blank_aircraft_is_treated_as_missing() {
        let weights = ScoringWeights {
            baseline: 0.9,
            ..Default::default()
        };
        let resolver = SeatResolver::new(
            Arc::new(RuleCatalog::new(vec![rule("ZZ_ZEPHYR_J", false)])),
            weights,
        );
        let mut evidence = zulu(Some(""), Some("business"));
        evidence.markers = FeatureMarkers {
            door: true,
            ..Default::default()
        };

        let resolution = resolver.resolve(&evidence);

        assert_eq!(resolution.status, ResolveStatus::NeedsMoreInfo);
        assert!(
            resolution.candidates[0]
                .reasons
                .iter()
                .any(|reason| reason == scoring::REASON_AIRCRAFT_MISSING)
        );
    }

    #[test]
    fn test_ranking_is_deterministic_and_sorted() {
        let mut second = rule("ZZ_B", false);
        second.aircraft_in = vec!["A350".to_string()];
        let mut third = rule("ZZ_C", false);
        third.product_names = vec!["Other".to_string()];
        let tie = rule("ZZ_D", false);

        let resolver = custom(vec![second, third, rule("ZZ_A", false), tie]);
        let evidence = zulu(Some("789"), Some("Zephyr"));

        let first = resolver.resolve(&evidence);
        let again = resolver.resolve(&evidence);

        assert_eq!(first.candidates, again.candidates);
        assert!(
            first
                .candidates
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
        let ids: Vec<_> = first.candidates.iter().map(|c| c.product.id.as_str()).collect();
        assert_eq!(ids, vec!["ZZ_A", "ZZ_D", "ZZ_B", "ZZ_C"]);
    }

    #[test]
    fn test_candidates_are_capped() {
        let rules = (0..8).map(|i| rule(&format!("ZZ_{}", i), false)).collect();
        let resolution = custom(rules).resolve(&zulu(Some("787-9"), Some("Zephyr")));

        assert_eq!(resolution.candidates.len(), 5);
        assert_eq!(resolution.candidates[0].product.id, "ZZ_0");
    }

    #[test]
    fn test_marker_gated_rule_needs_marker() {
        let mut gated = rule("ZZ_GATED", false);
        gated.require_markers_any = vec![Marker::Suite];
        let resolver = custom(vec![gated]);

        let bare = resolver.resolve(&zulu(Some("787-9"), Some("Zephyr")));
        assert!(bare.candidates.is_empty());

        let mut suite = zulu(Some("787-9"), Some("Zephyr"));
        suite.markers.suite = true;
        assert_eq!(resolver.resolve(&suite).candidates.len(), 1);
    }

    #[test]
    fn test_fallback_url() {
        let evidence = EvidenceBundle {
            airline_iata: Some(" nh ".to_string()),
            airline_name: Some("ANA (All Nippon Airways)".to_string()),
            ..Default::default()
        };
        assert_eq!(
            seatmaps_fallback_url(&evidence).as_deref(),
            Some("https://seatmaps.com/airlines/nh-ana-all-nippon-airways/")
        );
        assert_eq!(seatmaps_fallback_url(&EvidenceBundle::default()), None);
    }
}
