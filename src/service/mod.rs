pub mod catalog;
pub mod extraction;
pub mod normalize;
pub mod resolver;

pub use catalog::{CatalogError, RuleCatalog};
pub use extraction::{EvidenceExtractor, ExtractionError, OpenAiVisionExtractor};
pub use resolver::SeatResolver;
