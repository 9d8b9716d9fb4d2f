pub mod catalog;
pub mod config;
pub mod evidence;
pub mod extraction;
pub mod identifiers;
pub mod resolution;

pub use catalog::{ProductRule, RuleCabin, RuleSummary};
pub use config::{Config, ScoringWeights};
pub use evidence::{Cabin, CabinClass, EvidenceBundle, EvidenceClue, FeatureMarkers, Marker};
pub use extraction::ExtractedEvidence;
pub use identifiers::{CanonicalIdentifiers, RawIdentifiers};
pub use resolution::{Candidate, ClassifyResponse, Resolution, ResolveStatus, SeatProduct};
