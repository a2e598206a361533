//! Reply classifier: one low-temperature completion, parsed into a
//! [`ClassificationResult`].
//!
//! Malformed model output never escapes this module: it becomes
//! [`ClassificationResult::fallback`]. Completion-service failures do
//! escape, as [`LlmError`].

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LlmError;
use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::types::{Category, ClassificationResult, Confidence};
use crate::prompts;

/// Default sampling temperature for classification.
pub const CLASSIFY_TEMPERATURE: f32 = 0.3;

/// Classifies prospect replies into intent categories.
pub struct Classifier {
    llm: Arc<dyn LlmProvider>,
    temperature: f32,
}

impl Classifier {
    pub fn new(llm: Arc<dyn LlmProvider>, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    /// Classify a single reply.
    ///
    /// Errors only when the completion call itself fails.
    pub async fn classify(&self, message: &str) -> Result<ClassificationResult, LlmError> {
        let request = CompletionRequest::new(vec![ChatMessage::user(prompts::classifier_prompt(
            message,
        ))])
        .with_temperature(self.temperature);

        let response = self.llm.complete(request).await?;
        debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            cost = %self.llm.estimate_cost(&response),
            "Classification completion received"
        );

        Ok(parse_classification(&response.content).unwrap_or_else(|| {
            warn!(
                raw_response = %response.content,
                "Failed to parse classification, falling back to manual review"
            );
            ClassificationResult::fallback()
        }))
    }
}

// ── Response parsing ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawClassification {
    category: String,
    confidence: String,
    manual_required: Value,
}

/// Parse classifier output into a result, or `None` if anything is off.
///
/// Accepts a ```` ```json ```` fence, an unlabeled fence, or bare JSON.
pub fn parse_classification(raw: &str) -> Option<ClassificationResult> {
    let json_str = extract_json_object(raw);
    let parsed: RawClassification = serde_json::from_str(&json_str).ok()?;

    let category = parsed.category.parse::<Category>().ok()?;
    let confidence = parsed.confidence.parse::<Confidence>().ok()?;
    let manual_required = parsed.manual_required.as_bool()?;

    Some(ClassificationResult {
        category,
        confidence,
        manual_required,
    })
}

/// Strip markdown fencing (and stray prose) around a JSON object.
fn extract_json_object(text: &str) -> String {
    let trimmed = text.trim();

    let unfenced = if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        after.find("```").map_or(after, |end| &after[..end])
    } else if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        after.find("```").map_or(after, |end| &after[..end])
    } else {
        trimmed
    };
    let unfenced = unfenced.trim();

    if unfenced.starts_with('{') && unfenced.ends_with('}') {
        return unfenced.to_string();
    }

    // Try to find object bounds
    if let (Some(start), Some(end)) = (unfenced.find('{'), unfenced.rfind('}'))
        && end > start
    {
        return unfenced[start..=end].to_string();
    }

    unfenced.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;
    use crate::llm::mock::ScriptedLlm;

    const BODY: &str =
        r#"{"category": "SOFT_POSITIVE", "confidence": "medium", "manual_required": true}"#;

    fn expected() -> ClassificationResult {
        ClassificationResult {
            category: Category::SoftPositive,
            confidence: Confidence::Medium,
            manual_required: true,
        }
    }

    // ── Parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_is_fencing_agnostic() {
        let labeled = format!("```json\n{BODY}\n```");
        let unlabeled = format!("```\n{BODY}\n```");
        let raw = BODY.to_string();

        for input in [labeled, unlabeled, raw] {
            assert_eq!(parse_classification(&input), Some(expected()), "{input}");
        }
    }

    #[test]
    fn parse_tolerates_surrounding_prose() {
        let input = format!("Here is the classification:\n```json\n{BODY}\n```\nHope that helps.");
        assert_eq!(parse_classification(&input), Some(expected()));

        let inline = format!("Result: {BODY} done.");
        assert_eq!(parse_classification(&inline), Some(expected()));
    }

    #[test]
    fn parse_accepts_lowercase_category_and_uppercase_confidence() {
        let input = r#"{"category": "hard_no", "confidence": "HIGH", "manual_required": false}"#;
        let result = parse_classification(input).unwrap();
        assert_eq!(result.category, Category::HardNo);
        assert_eq!(result.confidence, Confidence::High);
        assert!(!result.manual_required);
    }

    #[test]
    fn parse_rejects_unparsable_text() {
        assert_eq!(parse_classification("I think this is a soft positive."), None);
        assert_eq!(parse_classification(""), None);
        assert_eq!(parse_classification("```json\n{ not json }\n```"), None);
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let input = r#"{"category": "LUKEWARM", "confidence": "high", "manual_required": false}"#;
        assert_eq!(parse_classification(input), None);
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let input = r#"{"category": "NEUTRAL", "confidence": "high"}"#;
        assert_eq!(parse_classification(input), None);
    }

    #[test]
    fn parse_rejects_non_boolean_manual_flag() {
        let input = r#"{"category": "NEUTRAL", "confidence": "high", "manual_required": "yes"}"#;
        assert_eq!(parse_classification(input), None);
    }

    #[test]
    fn extract_json_direct_object() {
        assert_eq!(extract_json_object(BODY), BODY);
    }

    #[test]
    fn extract_json_from_unterminated_fence() {
        let input = format!("```json\n{BODY}");
        assert_eq!(extract_json_object(&input), BODY);
    }

    // ── Classifier with scripted LLM ────────────────────────────────

    #[tokio::test]
    async fn classify_sends_single_low_temperature_prompt() {
        let llm = Arc::new(ScriptedLlm::replies([BODY]));
        let classifier = Classifier::new(llm.clone(), CLASSIFY_TEMPERATURE);

        let result = classifier.classify("Interesting. How does this work?").await.unwrap();
        assert_eq!(result, expected());

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
        assert!(
            request.messages[0]
                .content
                .contains("\"Interesting. How does this work?\"")
        );
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.max_tokens, None);
    }

    #[tokio::test]
    async fn classify_falls_back_on_garbage() {
        let llm = Arc::new(ScriptedLlm::replies(["Sorry, I can't help with that."]));
        let classifier = Classifier::new(llm, CLASSIFY_TEMPERATURE);

        let result = classifier.classify("???").await.unwrap();
        assert_eq!(result, ClassificationResult::fallback());
    }

    #[tokio::test]
    async fn classify_propagates_service_failure() {
        let llm = Arc::new(ScriptedLlm::new(vec![Err(LlmError::AuthFailed {
            provider: "scripted".into(),
        })]));
        let classifier = Classifier::new(llm, CLASSIFY_TEMPERATURE);

        let result = classifier.classify("Sure, let's talk").await;
        assert!(matches!(result, Err(LlmError::AuthFailed { .. })));
    }
}
