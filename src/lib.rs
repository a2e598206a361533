//! Autoresponder: intent classification and reply drafting for cold
//! outreach replies.

pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;

pub use config::AutoresponderConfig;
pub use error::{Error, Result};
pub use pipeline::{Autoresponder, Category, ClassificationResult, Confidence, ResponseRecord};
