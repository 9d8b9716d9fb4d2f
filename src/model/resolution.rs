use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::ProductRule;
use crate::model::evidence::EvidenceBundle;

pub const UNKNOWN_PRODUCT_ID: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStatus {
    Confirmed,
    Likely,
    NeedsMoreInfo,
}

/// Public projection of a product rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeatProduct {
    pub id: String,
    pub name: String,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub seatmaps_airline_url: Option<String>,
}

impl SeatProduct {
    /// Sentinel returned when no product can be named
    pub fn unknown(seatmaps_airline_url: Option<String>) -> Self {
        Self {
            id: UNKNOWN_PRODUCT_ID.to_string(),
            name: "Unknown".to_string(),
            notes: Some("Not enough evidence in screenshot.".to_string()),
            image_url: None,
            seatmaps_airline_url,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_PRODUCT_ID
    }
}

impl From<&ProductRule> for SeatProduct {
    fn from(rule: &ProductRule) -> Self {
        Self {
            id: rule.id.clone(),
            name: rule.display_name().to_string(),
            notes: rule.notes.clone(),
            image_url: rule.image_url.clone(),
            seatmaps_airline_url: rule.seatmaps_airline_url.clone(),
        }
    }
}

/// A rule that passed eligibility, with its score breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Candidate {
    pub product: SeatProduct,
    /// Clamped to [0, 1]
    pub score: f64,
    pub reasons: Vec<String>,
    /// The product's own name was seen in the evidence text
    pub keyword_confirmed: bool,
    /// The mixed-fleet penalty was applied
    pub mixed_fleet_penalized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resolution {
    pub status: ResolveStatus,
    pub confidence: f64,
    pub seat_product: SeatProduct,
    pub candidates: Vec<Candidate>,
    /// Empty unless status is `needs_more_info`
    pub next_screenshot_hint: String,
}

/// Evidence echoed back together with its resolution
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub evidence: EvidenceBundle,
    #[serde(flatten)]
    pub resolution: Resolution,
}
