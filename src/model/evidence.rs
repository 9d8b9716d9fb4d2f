//! Evidence observed about a single flight
//!
//! Every string signal is optional: `None` means the signal was not observed.
//! The extraction service reports unobserved fields as empty strings, so blank
//! values are folded into `None` at deserialization time.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Cabin tiers the resolver works with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    Business,
    First,
    #[default]
    Unknown,
}

impl Cabin {
    /// Parse a cabin label, narrowing anything outside business/first to `Unknown`
    pub fn from_label(label: &str) -> Self {
        CabinClass::from_label(label)
            .map(Cabin::from)
            .unwrap_or(Cabin::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cabin::Business => "business",
            Cabin::First => "first",
            Cabin::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Cabin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label.as_deref().map(Cabin::from_label).unwrap_or_default())
    }
}

/// Cabin classes as travellers see them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CabinClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase().replace(['-', '_'], " ");
        match label.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "economy" | "coach" => Some(CabinClass::Economy),
            "premium economy" | "premium" => Some(CabinClass::PremiumEconomy),
            "business" | "business class" => Some(CabinClass::Business),
            "first" | "first class" => Some(CabinClass::First),
            _ => None,
        }
    }
}

impl From<CabinClass> for Cabin {
    fn from(class: CabinClass) -> Self {
        match class {
            CabinClass::Business => Cabin::Business,
            CabinClass::First => Cabin::First,
            // No product rules exist below business
            CabinClass::Economy | CabinClass::PremiumEconomy => Cabin::Unknown,
        }
    }
}

/// Physical seat feature a rule can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    LieFlat,
    Suite,
    Door,
    DirectAisleAccess,
}

/// Independent feature observations. Each flag is evidence, not a conclusion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema,
)]
#[serde(default)]
pub struct FeatureMarkers {
    #[schemars(description = "Fully flat bed seat is shown or named")]
    pub lie_flat: bool,
    #[schemars(description = "Enclosed suite is shown or named")]
    pub suite: bool,
    #[schemars(description = "Privacy door is shown or named")]
    pub door: bool,
    #[schemars(description = "Every seat has direct aisle access")]
    pub direct_aisle_access: bool,
}

impl FeatureMarkers {
    pub fn is_set(&self, marker: Marker) -> bool {
        match marker {
            Marker::LieFlat => self.lie_flat,
            Marker::Suite => self.suite,
            Marker::Door => self.door,
            Marker::DirectAisleAccess => self.direct_aisle_access,
        }
    }
}

/// A clue the extractor saw and where it saw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct EvidenceClue {
    pub clue: String,
    #[serde(rename = "where")]
    #[schemars(description = "Part of the screenshot the clue was read from")]
    pub location: String,
}

/// Signals extracted for one flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvidenceBundle {
    #[serde(default, deserialize_with = "observed")]
    pub airline_name: Option<String>,
    #[serde(default, deserialize_with = "observed")]
    pub airline_iata: Option<String>,
    #[serde(default, deserialize_with = "observed")]
    pub flight_number: Option<String>,
    #[serde(default, deserialize_with = "observed")]
    pub route: Option<String>,
    #[serde(default)]
    pub cabin: Cabin,
    #[serde(default, deserialize_with = "observed")]
    pub aircraft_type: Option<String>,
    /// Exact cabin snippet as shown on screen
    #[serde(default, deserialize_with = "observed")]
    pub cabin_text_found: Option<String>,
    #[serde(default)]
    pub markers: FeatureMarkers,
    /// Snippet that justified the marker flags
    #[serde(default, deserialize_with = "observed")]
    pub markers_text: Option<String>,
    #[serde(default, deserialize_with = "observed")]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceClue>,
}

impl EvidenceBundle {
    /// Observed aircraft, ignoring blank values set directly on the struct
    pub fn aircraft(&self) -> Option<&str> {
        self.aircraft_type
            .as_deref()
            .filter(|aircraft| !aircraft.trim().is_empty())
    }

    /// Free text, cabin snippet and marker snippet joined for keyword search
    pub fn text_corpus(&self) -> String {
        [&self.raw_text, &self.cabin_text_found, &self.markers_text]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Missing, null and blank strings all mean "not observed"
fn observed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}
