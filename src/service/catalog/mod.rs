//! Product rule catalog
//!
//! An ordered, immutable set of product rules. Built once at startup, either
//! from the built-in table or from a YAML file, and shared read-only.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::ProductRule;

pub mod builtin;
pub mod validation;

pub use validation::{CatalogValidationResult, validate_rules};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Ordered product rules. Ranking ties fall back to this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalog {
    rules: Vec<ProductRule>,
}

impl RuleCatalog {
    pub fn new(rules: Vec<ProductRule>) -> Self {
        Self { rules }
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_rules())
    }

    /// Parse a catalog from YAML of the form `rules: [...]`
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Load the configured catalog (or the built-in one) and reject it if invalid
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading rule catalog from file");
                Self::from_yaml_file(path)?
            }
            None => Self::builtin(),
        };

        let validation = catalog.validate();
        for warning in &validation.warnings {
            tracing::warn!(warning = %warning, "Rule catalog warning");
        }
        if !validation.is_valid {
            return Err(CatalogError::Invalid(validation.errors));
        }

        tracing::info!(
            rules = catalog.len(),
            fingerprint = %catalog.fingerprint(),
            "Rule catalog ready"
        );

        Ok(catalog)
    }

    pub fn validate(&self) -> CatalogValidationResult {
        validate_rules(&self.rules)
    }

    pub fn rules(&self) -> &[ProductRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// SHA-256 of the serialized rules, hex encoded
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(&self.rules).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
