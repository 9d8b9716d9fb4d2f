//! Screenshot evidence extraction
//!
//! The only I/O boundary in front of the resolver. Implementations turn an
//! image into an `EvidenceBundle` or fail with a distinguishable error; they
//! never hand the resolver a malformed bundle.

use std::env;

use async_trait::async_trait;
use rig::OneOrMany;
use rig::message::{Message, UserContent};
use rig::providers::openai;

use crate::model::{EvidenceBundle, ExtractedEvidence};

pub mod error;
pub mod prompts;

pub use error::ExtractionError;
use prompts::{EXTRACTION_PROMPT, SCREENSHOT_INSTRUCTION};

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";

const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

const IMAGE_DATA_URL_PREFIX: &str = "data:image/";

#[async_trait]
pub trait EvidenceExtractor: Send + Sync {
    /// Read the screenshot behind `image_data_url` into an evidence bundle
    async fn extract(&self, image_data_url: &str) -> Result<EvidenceBundle, ExtractionError>;

    /// Short label used in logs and readiness output
    fn name(&self) -> &str;
}

/// Reject anything that is not an inline `data:image/...` URL
pub fn ensure_image_data_url(image_data_url: &str) -> Result<(), ExtractionError> {
    if image_data_url.starts_with(IMAGE_DATA_URL_PREFIX) {
        Ok(())
    } else {
        Err(ExtractionError::InvalidImage)
    }
}

/// User turn carrying the instruction and the screenshot itself
pub fn screenshot_message(image_data_url: &str) -> Message {
    let mut content = OneOrMany::one(UserContent::text(SCREENSHOT_INSTRUCTION));
    content.push(UserContent::image_url(image_data_url, None, None));
    Message::User { content }
}

/// Vision extractor on an OpenAI model
pub struct OpenAiVisionExtractor {
    client: openai::Client,
    model: String,
}

impl OpenAiVisionExtractor {
    pub fn new(client: openai::Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create an extractor from an API key and model name
    pub fn with_api_key(api_key: &str, model: impl Into<String>) -> Result<Self, ExtractionError> {
        let client = openai::Client::new(api_key)
            .map_err(|e| ExtractionError::ClientInit(e.to_string()))?;
        Ok(Self::new(client, model))
    }

    /// Build from the environment
    ///
    /// `OPENAI_API_KEY` is required and `OPENAI_MODEL` falls back to the
    /// default model. Returns `None` when no usable key is set.
    pub fn from_env() -> Option<Self> {
        let Some(api_key) = env::var(ENV_OPENAI_API_KEY).ok().filter(|k| !k.trim().is_empty())
        else {
            tracing::warn!(
                "OpenAI API key not found ({ENV_OPENAI_API_KEY}), screenshot classification disabled"
            );
            return None;
        };

        let model = env::var(ENV_OPENAI_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        match Self::with_api_key(&api_key, model) {
            Ok(extractor) => {
                tracing::info!(model = %extractor.model, "Vision extractor initialized");
                Some(extractor)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Screenshot classification disabled");
                None
            }
        }
    }
}

#[async_trait]
impl EvidenceExtractor for OpenAiVisionExtractor {
    async fn extract(&self, image_data_url: &str) -> Result<EvidenceBundle, ExtractionError> {
        ensure_image_data_url(image_data_url)?;

        let start_time = std::time::Instant::now();
        tracing::debug!(model = %self.model, "Requesting screenshot extraction");

        let extractor = self
            .client
            .extractor::<ExtractedEvidence>(&self.model)
            .preamble(EXTRACTION_PROMPT)
            .additional_params(serde_json::json!({
                "temperature": 0.0
            }))
            .build();

        let extracted = extractor
            .extract(screenshot_message(image_data_url))
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Extraction request failed");
                ExtractionError::ExtractionFailed(e.to_string())
            })?;

        let bundle = EvidenceBundle::from(extracted);

        tracing::info!(
            airline = ?bundle.airline_iata,
            cabin = bundle.cabin.as_str(),
            aircraft = ?bundle.aircraft(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Screenshot extraction completed"
        );

        Ok(bundle)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_url_check() {
        assert!(ensure_image_data_url("data:image/png;base64,iVBORw0KGgo=").is_ok());
        assert!(matches!(
            ensure_image_data_url("https://example.com/shot.png"),
            Err(ExtractionError::InvalidImage)
        ));
        assert!(ensure_image_data_url("").is_err());
    }

    #[test]
    fn test_screenshot_message_carries_text_and_image() {
        let Message::User { content } = screenshot_message("data:image/png;base64,AA") else {
            panic!("expected a user message");
        };

        let parts: Vec<_> = content.iter().collect();
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[0], UserContent::Text(_)));
        assert!(matches!(parts[1], UserContent::Image(_)));
    }

    #[test]
    fn test_extractor_uses_model_as_name() {
        let extractor = OpenAiVisionExtractor::with_api_key("key", "test-model").unwrap();
        assert_eq!(extractor.name(), "test-model");
    }

    #[tokio::test]
    async fn test_extract_rejects_non_image_before_network() {
        let extractor = OpenAiVisionExtractor::with_api_key("key", "test-model").unwrap();
        let result = extractor.extract("file:///tmp/shot.png").await;
        assert!(matches!(result, Err(ExtractionError::InvalidImage)));
    }
}
