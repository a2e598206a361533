//! Shared types for the reply pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Category ────────────────────────────────────────────────────────

/// Intent category of a prospect's reply. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Clear willingness to talk or book a call.
    StrongPositive,
    /// Interest implied, no explicit agreement to talk.
    SoftPositive,
    /// Asking for clarification, no clear interest.
    Neutral,
    /// Hesitation or deferral.
    SoftObjection,
    /// Explicit rejection or opt-out.
    HardNo,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::StrongPositive,
        Self::SoftPositive,
        Self::Neutral,
        Self::SoftObjection,
        Self::HardNo,
    ];

    /// Wire token, as the classifier prompt spells it.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongPositive => "STRONG_POSITIVE",
            Self::SoftPositive => "SOFT_POSITIVE",
            Self::Neutral => "NEUTRAL",
            Self::SoftObjection => "SOFT_OBJECTION",
            Self::HardNo => "HARD_NO",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive; spaces and hyphens count as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.label() == normalized)
            .ok_or_else(|| format!("unknown category: '{s}'"))
    }
}

// ── Confidence ──────────────────────────────────────────────────────

/// The classifier's self-reported certainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("unknown confidence: '{s}'")),
        }
    }
}

// ── Classification ──────────────────────────────────────────────────

/// Outcome of classifying one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: Confidence,
    /// Advisory: a human should look at this reply. Never changes the template.
    pub manual_required: bool,
}

impl ClassificationResult {
    /// Used when the classifier's output can't be parsed. Flags for review
    /// rather than guessing a committal category.
    pub const fn fallback() -> Self {
        Self {
            category: Category::Neutral,
            confidence: Confidence::Low,
            manual_required: true,
        }
    }
}

// ── Response record ─────────────────────────────────────────────────

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub category: Category,
    pub confidence: Confidence,
    pub manual_required: bool,
    pub response: String,
}

impl ResponseRecord {
    pub fn new(classification: ClassificationResult, response: impl Into<String>) -> Self {
        Self {
            category: classification.category,
            confidence: classification.confidence,
            manual_required: classification.manual_required,
            response: response.into(),
        }
    }
}
