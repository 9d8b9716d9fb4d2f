use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::evidence::FeatureMarkers;

const ENV_CONFIG_PATH: &str = "SEAT_RESOLVER_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Scoring constants for the resolver
///
/// Defaults are the calibrated production values. Any key omitted from the
/// `scoring` section of the config file keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Score of a rule that only passed the airline + cabin gate
    pub baseline: f64,
    pub aircraft_anchor: f64,
    pub keyword_anchor: f64,
    pub lie_flat_bonus: f64,
    pub suite_bonus: f64,
    pub door_bonus: f64,
    pub direct_aisle_bonus: f64,
    pub mixed_fleet_penalty: f64,
    /// Confirmation threshold when the product keyword was seen
    pub keyword_confirm_threshold: f64,
    /// Confirmation threshold without a keyword (mixed-fleet rules excluded)
    pub confirm_threshold: f64,
    pub likely_threshold: f64,
    pub unknown_cabin_confidence: f64,
    pub no_match_confidence: f64,
    pub max_candidates: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            baseline: 0.35,
            aircraft_anchor: 0.25,
            keyword_anchor: 0.60,
            lie_flat_bonus: 0.08,
            suite_bonus: 0.08,
            door_bonus: 0.06,
            direct_aisle_bonus: 0.04,
            mixed_fleet_penalty: 0.20,
            keyword_confirm_threshold: 0.78,
            confirm_threshold: 0.70,
            likely_threshold: 0.55,
            unknown_cabin_confidence: 0.30,
            no_match_confidence: 0.35,
            max_candidates: 5,
        }
    }
}

impl ScoringWeights {
    /// Sum of the bonuses for every marker that is set
    pub fn marker_bonus(&self, markers: &FeatureMarkers) -> f64 {
        let mut bonus = 0.0;
        if markers.lie_flat {
            bonus += self.lie_flat_bonus;
        }
        if markers.suite {
            bonus += self.suite_bonus;
        }
        if markers.door {
            bonus += self.door_bonus;
        }
        if markers.direct_aisle_access {
            bonus += self.direct_aisle_bonus;
        }
        bonus
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Rule catalog to load instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub scoring: ScoringWeights,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub scoring: ScoringWeights,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            scoring: ScoringWeights::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self {
            catalog_path: file.catalog_path,
            scoring: file.scoring,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents, path),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config(contents: &str, path: &Path) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_scoring_section_keeps_defaults() {
        let yaml = "scoring:\n  mixed_fleet_penalty: 0.3\n  max_candidates: 3\n";
        let file = Config::parse_config(yaml, Path::new("inline.yaml")).unwrap();

        assert_eq!(file.scoring.mixed_fleet_penalty, 0.3);
        assert_eq!(file.scoring.max_candidates, 3);
        assert_eq!(file.scoring.baseline, 0.35);
        assert_eq!(file.scoring.keyword_anchor, 0.60);
        assert!(file.catalog_path.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = Config::parse_config("  \n", Path::new("empty.yaml")).unwrap();
        assert_eq!(file.scoring, ScoringWeights::default());
    }

    #[test]
    fn test_unparsable_config_is_ignored() {
        assert!(Config::parse_config("scoring: [1, 2", Path::new("bad.yaml")).is_none());
    }

    #[test]
    fn test_catalog_path_is_read() {
        let file =
            Config::parse_config("catalog_path: rules/custom.yaml\n", Path::new("c.yaml")).unwrap();
        assert_eq!(file.catalog_path, Some(PathBuf::from("rules/custom.yaml")));
    }

    #[test]
    fn test_marker_bonus_sums_set_flags() {
        let weights = ScoringWeights::default();
        let markers = FeatureMarkers {
            lie_flat: true,
            door: true,
            ..Default::default()
        };
        assert!((weights.marker_bonus(&markers) - 0.14).abs() < 1e-9);
        assert_eq!(weights.marker_bonus(&FeatureMarkers::default()), 0.0);
    }
}
