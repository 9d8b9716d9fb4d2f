//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{
    CatalogError, EvidenceExtractor, OpenAiVisionExtractor, RuleCatalog, SeatResolver,
};

/// Application state shared by all workers
///
/// Everything here is read-only after startup, so handlers can resolve
/// concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    /// Resolver over the loaded rule catalog
    pub resolver: Arc<SeatResolver>,
    /// Screenshot extractor; `None` disables `/v1/classify`
    pub extractor: Option<Arc<dyn EvidenceExtractor>>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Rule catalog loading and validation
    /// 2. Resolver construction with the configured weights
    /// 3. Vision extractor initialization (optional, needs OPENAI_API_KEY)
    pub fn new(config: Config) -> Result<Self, AppError> {
        let catalog = RuleCatalog::load(config.catalog_path.as_deref())?;
        let resolver = SeatResolver::new(Arc::new(catalog), config.scoring);

        let extractor = OpenAiVisionExtractor::from_env()
            .map(|extractor| Arc::new(extractor) as Arc<dyn EvidenceExtractor>);

        Ok(Self::from_parts(resolver, extractor))
    }

    /// Assemble state from already-built services
    pub fn from_parts(
        resolver: SeatResolver,
        extractor: Option<Arc<dyn EvidenceExtractor>>,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            extractor,
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Rule catalog could not be loaded
    #[error("Rule catalog initialization failed: {0}")]
    Catalog(#[from] CatalogError),
}
