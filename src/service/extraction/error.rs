//! Error types for screenshot evidence extraction

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("Missing imageDataUrl (expected data:image/... base64 URL)")]
    InvalidImage,

    #[error("Failed to create vision client: {0}")]
    ClientInit(String),

    #[error("Screenshot extraction failed: {0}")]
    ExtractionFailed(String),
}
