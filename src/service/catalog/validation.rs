//! Authoring checks for product rule catalogs
//!
//! Errors make a catalog unusable. Warnings flag entries that will still match
//! but probably not the way the author intended.

use std::collections::HashSet;

use crate::model::ProductRule;
use crate::service::normalize::{KNOWN_AIRCRAFT, is_known_aircraft, normalize_aircraft};

/// Result of catalog validation
#[derive(Debug, Default)]
pub struct CatalogValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CatalogValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate every rule and the catalog as a whole
pub fn validate_rules(rules: &[ProductRule]) -> CatalogValidationResult {
    let mut result = CatalogValidationResult::valid();
    let mut seen_ids = HashSet::new();

    if rules.is_empty() {
        result.add_warning("Catalog contains no rules; every resolution will need more info".into());
    }

    for (idx, rule) in rules.iter().enumerate() {
        let label = if rule.id.trim().is_empty() {
            format!("rule #{}", idx)
        } else {
            rule.id.clone()
        };

        if rule.id.trim().is_empty() {
            result.add_error(format!("{}: id is empty", label));
        } else if !seen_ids.insert(rule.id.as_str()) {
            result.add_error(format!("{}: duplicate id", label));
        }

        if rule.airline_iata.trim().is_empty() && rule.airline_name.trim().is_empty() {
            result.add_error(format!("{}: needs an airline code or name", label));
        }

        if rule.product_names.is_empty() {
            result.add_error(format!("{}: product_names is empty", label));
        }
        if rule.product_names.iter().any(|name| name.trim().is_empty()) {
            result.add_error(format!("{}: product_names contains a blank entry", label));
        }

        for token in &rule.aircraft_in {
            if token.trim().is_empty() {
                result.add_error(format!("{}: aircraft_in contains a blank entry", label));
            } else if !is_family_token(token) {
                result.add_warning(format!(
                    "{}: aircraft token '{}' is not a known family or family prefix",
                    label, token
                ));
            }
        }
    }

    result
}

/// Type series that have no canonical family but do fly premium cabins
const OTHER_SERIES: &[&str] = &["747", "767"];

// Matching is substring based, so "777" and "A350" are legitimate family tokens.
// Variants such as "777-200LR" or "A330neo" belong to a known series.
fn is_family_token(token: &str) -> bool {
    let canonical = normalize_aircraft(token);
    if is_known_aircraft(&canonical) {
        return true;
    }

    let base = canonical.trim_end_matches("NEO").trim_end_matches('-');
    if is_known_aircraft(base) {
        return true;
    }

    let series = base.split('-').next().unwrap_or(base);
    !series.is_empty()
        && (OTHER_SERIES.contains(&series)
            || KNOWN_AIRCRAFT.iter().any(|family| family.starts_with(series)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RuleCabin;

    fn rule(id: &str) -> ProductRule {
        ProductRule {
            id: id.to_string(),
            airline_iata: "LH".to_string(),
            airline_name: "Lufthansa".to_string(),
            cabin: RuleCabin::Business,
            aircraft_in: vec!["A359".to_string()],
            product_names: vec!["Allegris".to_string()],
            notes: None,
            seatmaps_airline_url: None,
            image_url: None,
            require_markers_any: Vec::new(),
            requires_corroboration: false,
        }
    }

    #[test]
    fn test_valid_rule() {
        let result = validate_rules(&[rule("LH_ALLEGRIS")]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let result = validate_rules(&[rule("DUP"), rule("DUP")]);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_missing_product_names_is_error() {
        let mut bad = rule("NO_NAMES");
        bad.product_names.clear();
        let result = validate_rules(&[bad]);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_blank_aircraft_token_is_error() {
        let mut bad = rule("BLANK_TOKEN");
        bad.aircraft_in.push("  ".to_string());
        assert!(!validate_rules(&[bad]).is_valid);
    }

    #[test]
    fn test_family_prefix_tokens_are_accepted() {
        let mut ok = rule("PREFIX");
        ok.aircraft_in = vec!["777".to_string(), "A350".to_string(), "77W".to_string()];
        let result = validate_rules(&[ok]);
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_series_variants_are_accepted() {
        let mut ok = rule("VARIANTS");
        ok.aircraft_in = vec![
            "767".to_string(),
            "777-200LR".to_string(),
            "A330neo".to_string(),
            "A330-900neo".to_string(),
        ];
        let result = validate_rules(&[ok]);
        assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_unknown_aircraft_token_is_warning() {
        let mut odd = rule("ODD");
        odd.aircraft_in = vec!["E195".to_string()];
        let result = validate_rules(&[odd]);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }
}
