//! LLM integration.
//!
//! The pipeline only sees the [`LlmProvider`] trait. [`OpenAiProvider`] is
//! the production backend; tests substitute scripted providers.

mod costs;
#[cfg(test)]
pub(crate) mod mock;
pub mod openai;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::*;

use std::sync::Arc;

use secrecy::SecretString;

use crate::error::{ConfigError, LlmError};

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub model: String,
    /// Override for OpenAI-compatible endpoints.
    pub base_url: Option<String>,
}

impl LlmConfig {
    /// Read the credential from `OPENAI_API_KEY` and an optional
    /// `OPENAI_BASE_URL`.
    pub fn from_env(model: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty());

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: model.into(),
            base_url,
        })
    }
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = match config.base_url {
        Some(ref base_url) => {
            OpenAiProvider::with_base_url(config.api_key.clone(), &config.model, base_url)?
        }
        None => OpenAiProvider::new(config.api_key.clone(), &config.model)?,
    };
    tracing::info!("Using OpenAI (model: {})", config.model);
    Ok(Arc::new(provider))
}
