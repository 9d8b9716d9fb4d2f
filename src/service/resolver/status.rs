//! Status classification for the top candidate

use crate::model::{Candidate, EvidenceBundle, ResolveStatus, ScoringWeights};

/// Map the best candidate to a status
///
/// The score thresholds decide first. The engine then refuses to claim
/// anything when none of aircraft, product keyword or a premium physical
/// feature (suite / lie-flat) was observed.
pub fn classify(
    best: &Candidate,
    evidence: &EvidenceBundle,
    weights: &ScoringWeights,
) -> ResolveStatus {
    let keyword_confirmed =
        best.keyword_confirmed && best.score >= weights.keyword_confirm_threshold;
    let anchor_confirmed = best.score >= weights.confirm_threshold && !best.mixed_fleet_penalized;

    let status = if keyword_confirmed || anchor_confirmed {
        ResolveStatus::Confirmed
    } else if best.score >= weights.likely_threshold {
        ResolveStatus::Likely
    } else {
        ResolveStatus::NeedsMoreInfo
    };

    if lacks_anchor(best, evidence) {
        return ResolveStatus::NeedsMoreInfo;
    }

    status
}

fn lacks_anchor(best: &Candidate, evidence: &EvidenceBundle) -> bool {
    evidence.aircraft().is_none()
        && !best.keyword_confirmed
        && !(evidence.markers.suite || evidence.markers.lie_flat)
}
