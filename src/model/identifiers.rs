use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Freeform identifiers as typed or transcribed
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RawIdentifiers {
    pub airline: String,
    pub aircraft: String,
    pub route: String,
}

/// Canonical lookup keys derived from `RawIdentifiers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CanonicalIdentifiers {
    pub airline: String,
    pub aircraft: String,
    pub route: String,
    /// `route` has the `LLL-LLL` shape
    pub route_valid: bool,
    /// `aircraft` is one of the known canonical families
    pub aircraft_known: bool,
}
