//! Configuration types.

use crate::error::ConfigError;
use crate::prompts::DEFAULT_CALENDAR_LINK;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Autoresponder configuration.
#[derive(Debug, Clone)]
pub struct AutoresponderConfig {
    /// Model identifier used for both classification and generation.
    pub model: String,
    /// Booking link substituted into strong-positive replies.
    pub calendar_link: String,
    /// Sampling temperature for classification (kept low for stable labels).
    pub classify_temperature: f32,
    /// Sampling temperature for reply generation.
    pub generate_temperature: f32,
    /// Output ceiling for generated replies.
    pub generate_max_tokens: u32,
}

impl Default for AutoresponderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            calendar_link: DEFAULT_CALENDAR_LINK.to_string(),
            classify_temperature: 0.3,
            generate_temperature: 0.7,
            generate_max_tokens: 150,
        }
    }
}

impl AutoresponderConfig {
    /// Defaults, overridden by `AUTORESPONDER_MODEL` and
    /// `AUTORESPONDER_CALENDAR_LINK` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(model) = lookup("AUTORESPONDER_MODEL") {
            let model = model.trim();
            if model.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "AUTORESPONDER_MODEL".into(),
                    message: "must not be empty".into(),
                });
            }
            config.model = model.to_string();
        }

        if let Some(link) = lookup("AUTORESPONDER_CALENDAR_LINK") {
            let link = link.trim();
            if !(link.starts_with("http://") || link.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: "AUTORESPONDER_CALENDAR_LINK".into(),
                    message: format!("expected an http(s) URL, got '{link}'"),
                });
            }
            config.calendar_link = link.to_string();
        }

        Ok(config)
    }
}
