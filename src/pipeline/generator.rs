//! Response generator: picks the category's template, assembles the
//! few-shot transcript, and asks the model for a short reply.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::LlmError;
use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::types::Category;
use crate::prompts::{self, PromptTemplate};

/// Default sampling temperature for reply generation.
pub const GENERATE_TEMPERATURE: f32 = 0.7;

/// Default output ceiling for generated replies.
pub const GENERATE_MAX_TOKENS: u32 = 150;

/// Generates category-appropriate replies.
pub struct ResponseGenerator {
    llm: Arc<dyn LlmProvider>,
    calendar_link: String,
    temperature: f32,
    max_tokens: u32,
}

impl ResponseGenerator {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        calendar_link: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            llm,
            calendar_link: calendar_link.into(),
            temperature,
            max_tokens,
        }
    }

    /// Produce a reply for `message` in the given category.
    ///
    /// `HardNo` returns the fixed opt-out text without calling the model.
    pub async fn generate(&self, message: &str, category: Category) -> Result<String, LlmError> {
        if category == Category::HardNo {
            debug!("Hard no, returning fixed acknowledgment");
            return Ok(prompts::HARD_NO_RESPONSE.to_string());
        }

        let Some(template) = prompts::catalog().template(category) else {
            warn!(category = %category, "No reply template for category, deferring");
            return Ok(prompts::DEFERRAL_RESPONSE.to_string());
        };

        let request = CompletionRequest::new(build_messages(template, &self.calendar_link, message))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let response = self.llm.complete(request).await?;
        debug!(
            category = %category,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            cost = %self.llm.estimate_cost(&response),
            "Reply completion received"
        );

        Ok(response.content.trim().to_string())
    }
}

/// Assemble the conversation sent for generation: rendered instruction,
/// worked examples with the link filled in, then the live reply.
pub fn build_messages(
    template: &PromptTemplate,
    calendar_link: &str,
    message: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(template.examples.len() + 2);
    messages.push(ChatMessage::system(prompts::render_instruction(
        template,
        calendar_link,
    )));
    messages.extend(template.examples.iter().map(|example| {
        ChatMessage::new(example.role, prompts::render_example(example, calendar_link))
    }));
    messages.push(ChatMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;
    use crate::llm::mock::{FewShotEchoLlm, ScriptedLlm};

    const LINK: &str = "https://cal.com/leo/intro";

    fn generator(llm: Arc<dyn LlmProvider>) -> ResponseGenerator {
        ResponseGenerator::new(llm, LINK, GENERATE_TEMPERATURE, GENERATE_MAX_TOKENS)
    }

    // ── Transcript assembly ─────────────────────────────────────────

    #[test]
    fn build_messages_orders_instruction_examples_then_live_turn() {
        let template = prompts::catalog().template(Category::SoftObjection).unwrap();
        let messages = build_messages(template, LINK, "Maybe next quarter.");

        assert_eq!(messages.len(), template.examples.len() + 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("soft objection"));
        assert!(messages[0].content.contains("CONTEXT ABOUT ME:"));

        for (message, example) in messages[1..messages.len() - 1].iter().zip(template.examples) {
            assert_eq!(message.role, example.role);
            assert_eq!(message.content, example.content);
        }

        let last = messages.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "Maybe next quarter.");
    }

    #[test]
    fn build_messages_substitutes_link_into_examples() {
        let template = prompts::catalog().template(Category::StrongPositive).unwrap();
        let messages = build_messages(template, LINK, "Sure, we can talk.");

        assert!(messages.iter().all(|m| !m.content.contains("{calendar_link}")));
        let with_link = messages.iter().filter(|m| m.content.contains(LINK)).count();
        // instruction plus the three worked replies
        assert_eq!(with_link, 4);
    }

    #[test]
    fn build_messages_keeps_link_out_of_other_categories() {
        for category in [
            Category::SoftPositive,
            Category::Neutral,
            Category::SoftObjection,
        ] {
            let template = prompts::catalog().template(category).unwrap();
            let messages = build_messages(template, LINK, "hello");
            assert!(messages.iter().all(|m| !m.content.contains(LINK)), "{category}");
        }
    }

    // ── Generation ──────────────────────────────────────────────────

    #[tokio::test]
    async fn hard_no_returns_fixed_text_without_calling_model() {
        let llm = Arc::new(ScriptedLlm::replies(["should never be used"]));
        let reply = generator(llm.clone())
            .generate("Stop emailing me.", Category::HardNo)
            .await
            .unwrap();

        assert_eq!(
            reply,
            "Thank you for letting me know. Removing you from my list."
        );
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn generate_requests_warm_short_completion() {
        let llm = Arc::new(ScriptedLlm::replies(["  Fair question.  \n"]));
        let reply = generator(llm.clone())
            .generate("What company are you with?", Category::Neutral)
            .await
            .unwrap();

        assert_eq!(reply, "Fair question.");
        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, Some(0.7));
        assert_eq!(requests[0].max_tokens, Some(150));
        assert_eq!(
            requests[0].messages.last().unwrap().content,
            "What company are you with?"
        );
    }

    #[tokio::test]
    async fn every_category_respects_word_ceiling_and_link_rule() {
        let llm = Arc::new(FewShotEchoLlm::new());
        let generator = generator(llm.clone());

        for category in Category::ALL {
            let reply = generator.generate("Tell me more", category).await.unwrap();
            let words = reply.split_whitespace().count();

            match prompts::catalog().template(category) {
                Some(template) => {
                    assert!(words <= template.max_words, "{category}: {reply:?}");
                    assert_eq!(
                        reply.contains(LINK),
                        category == Category::StrongPositive,
                        "{category}: {reply:?}"
                    );
                }
                None => {
                    assert_eq!(reply, prompts::HARD_NO_RESPONSE);
                }
            }
        }

        // One model call per category except HardNo.
        assert_eq!(llm.call_count(), 4);
    }

    #[tokio::test]
    async fn generate_propagates_service_failure() {
        let llm = Arc::new(ScriptedLlm::new(vec![Err(LlmError::RateLimited {
            provider: "scripted".into(),
            retry_after: None,
        })]));
        let result = generator(llm)
            .generate("Interesting.", Category::SoftPositive)
            .await;
        assert!(matches!(result, Err(LlmError::RateLimited { .. })));
    }
}
