use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::evidence::{Cabin, Marker};

/// Cabin tiers a product rule can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleCabin {
    Business,
    First,
}

impl RuleCabin {
    pub fn matches(&self, cabin: Cabin) -> bool {
        matches!(
            (self, cabin),
            (RuleCabin::Business, Cabin::Business) | (RuleCabin::First, Cabin::First)
        )
    }
}

// One seat/cabin product and the evidence that identifies it
// - airline_iata / airline_name: either anchor alone makes the airline match
// - aircraft_in: substring tokens; empty means no aircraft anchor exists
// - product_names: keywords, the first one is the display name
// - require_markers_any: eligibility gate, any one marker is enough
// - requires_corroboration: the airline+aircraft also carries sibling products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRule {
    pub id: String,
    pub airline_iata: String,
    pub airline_name: String,
    pub cabin: RuleCabin,
    #[serde(default)]
    pub aircraft_in: Vec<String>,
    pub product_names: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub seatmaps_airline_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub require_markers_any: Vec<Marker>,
    #[serde(default)]
    pub requires_corroboration: bool,
}

impl ProductRule {
    /// Display name for candidates built from this rule
    pub fn display_name(&self) -> &str {
        self.product_names
            .first()
            .map(String::as_str)
            .unwrap_or(&self.id)
    }
}

/// Compact listing entry for `GET /v1/rules`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RuleSummary {
    pub id: String,
    pub airline_iata: String,
    pub airline_name: String,
    pub cabin: RuleCabin,
    pub name: String,
    pub aircraft_in: Vec<String>,
    pub requires_corroboration: bool,
}

impl From<&ProductRule> for RuleSummary {
    fn from(rule: &ProductRule) -> Self {
        Self {
            id: rule.id.clone(),
            airline_iata: rule.airline_iata.clone(),
            airline_name: rule.airline_name.clone(),
            cabin: rule.cabin,
            name: rule.display_name().to_string(),
            aircraft_in: rule.aircraft_in.clone(),
            requires_corroboration: rule.requires_corroboration,
        }
    }
}
