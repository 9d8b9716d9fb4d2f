//! LLM-extractable shape for one flight screenshot

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Cabin, EvidenceBundle, EvidenceClue, FeatureMarkers};

/// What the vision model reads off a flight search screenshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Signals visible on a flight search screenshot. Unseen text fields are empty strings.")]
#[serde(default)]
pub struct ExtractedEvidence {
    #[schemars(description = "Marketing airline name as displayed, empty if not visible")]
    pub airline_name: String,

    #[schemars(description = "Two-letter IATA airline code, empty if not visible")]
    pub airline_iata: String,

    #[schemars(description = "Flight number such as 'LH 400', empty if not visible")]
    pub flight_number: String,

    #[schemars(description = "Route as ORIGIN-DESTINATION airport codes, empty if not visible")]
    pub route: String,

    #[schemars(description = "Cabin tier: business, first or unknown")]
    pub cabin: Cabin,

    #[schemars(description = "Aircraft type exactly as shown (e.g. 'A350-900', '77W'), empty if not visible")]
    pub aircraft_type: String,

    /// Exact cabin snippet as shown on screen
    #[schemars(description = "The cabin label text exactly as it appears")]
    pub cabin_text_found: String,

    #[schemars(description = "Seat features that are explicitly shown or named")]
    pub markers: FeatureMarkers,

    #[schemars(description = "Text snippet that justified the marker flags")]
    pub markers_text: String,

    #[schemars(description = "Other visible text that may name the seat product")]
    pub raw_text: String,

    #[schemars(description = "Short clues with the screen area they came from")]
    pub evidence: Vec<EvidenceClue>,
}

impl From<ExtractedEvidence> for EvidenceBundle {
    fn from(extracted: ExtractedEvidence) -> Self {
        Self {
            airline_name: non_blank(extracted.airline_name),
            airline_iata: non_blank(extracted.airline_iata),
            flight_number: non_blank(extracted.flight_number),
            route: non_blank(extracted.route),
            cabin: extracted.cabin,
            aircraft_type: non_blank(extracted.aircraft_type),
            cabin_text_found: non_blank(extracted.cabin_text_found),
            markers: extracted.markers,
            markers_text: non_blank(extracted.markers_text),
            raw_text: non_blank(extracted.raw_text),
            evidence: extracted.evidence,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}
