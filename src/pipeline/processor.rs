//! Pipeline orchestrator: classify, then generate, then package.
//!
//! Flow:
//! 1. `Classifier::classify()`: low-temperature completion, malformed
//!    output already recovered to the manual-review fallback
//! 2. `ResponseGenerator::generate()`: template by category, fixed text
//!    for hard no
//! 3. `ResponseRecord` assembled from both
//!
//! A completion-service failure in either stage aborts the run; no record
//! is produced from a failed classification.

use std::sync::Arc;

use tracing::info;

use crate::config::AutoresponderConfig;
use crate::error::{LlmError, PipelineError};
use crate::llm::{LlmConfig, LlmProvider, create_provider};
use crate::pipeline::classifier::Classifier;
use crate::pipeline::generator::ResponseGenerator;
use crate::pipeline::types::ResponseRecord;

/// Classifies a prospect's reply and drafts the matching response.
///
/// Holds no per-call state; share it behind an `Arc` to process replies
/// concurrently.
pub struct Autoresponder {
    classifier: Classifier,
    generator: ResponseGenerator,
}

impl Autoresponder {
    pub fn new(llm: Arc<dyn LlmProvider>, config: &AutoresponderConfig) -> Self {
        Self {
            classifier: Classifier::new(Arc::clone(&llm), config.classify_temperature),
            generator: ResponseGenerator::new(
                llm,
                config.calendar_link.clone(),
                config.generate_temperature,
                config.generate_max_tokens,
            ),
        }
    }

    /// Build the production provider from a credential, then the pipeline.
    pub fn from_llm_config(
        llm_config: &LlmConfig,
        config: &AutoresponderConfig,
    ) -> Result<Self, LlmError> {
        let llm = create_provider(llm_config)?;
        Ok(Self::new(llm, config))
    }

    /// Run one reply through classification and generation.
    pub async fn process(&self, message: &str) -> Result<ResponseRecord, PipelineError> {
        let classification = self
            .classifier
            .classify(message)
            .await
            .map_err(PipelineError::Classification)?;

        info!(
            category = %classification.category,
            confidence = %classification.confidence,
            manual_required = classification.manual_required,
            "Reply classified"
        );

        let response = self
            .generator
            .generate(message, classification.category)
            .await
            .map_err(PipelineError::Generation)?;

        Ok(ResponseRecord::new(classification, response))
    }
}
