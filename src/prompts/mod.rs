//! Prompt catalog.
//!
//! Read-only prompt data: the classifier instruction, one reply template per
//! category, and the fixed texts that bypass the model. The catalog is built
//! once and shared by every pipeline run without locking.

mod templates;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::llm::Role;
use crate::pipeline::types::Category;

pub use templates::{CLASSIFIER_PROMPT, OPERATOR_CONTEXT};

/// Fixed acknowledgment for opt-outs. Never generated by the model.
pub const HARD_NO_RESPONSE: &str = "Thank you for letting me know. Removing you from my list.";

/// Reply for a category with no template.
pub const DEFERRAL_RESPONSE: &str = "I'll get back to you shortly.";

/// Calendar link used when none is configured.
pub const DEFAULT_CALENDAR_LINK: &str = "https://cal.com/your-calendar";

/// Demo replies, one per category, as `(label, reply)`.
pub const SAMPLE_REPLIES: &[(&str, &str)] = &[
    ("Let's talk", "Sure, let's chat. Send me your calendar."),
    ("Curious", "Interesting. How does this work?"),
    ("Who is this?", "What company are you with?"),
    ("Not now", "Not a priority right now, maybe later."),
    ("Hard no", "Not interested, please remove me."),
];

/// One turn of a worked example transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FewShotExample {
    pub role: Role,
    /// May contain `{calendar_link}`.
    pub content: &'static str,
}

impl FewShotExample {
    pub const fn new(role: Role, content: &'static str) -> Self {
        Self { role, content }
    }
}

/// Reply template for one category.
///
/// The numeric ceilings restate the limits written in `instruction`; the
/// model is steered by the prose, the numbers are for callers and tests.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// Instruction text with `{context}` and optionally `{calendar_link}`.
    pub instruction: &'static str,
    /// Alternating user/assistant turns shown before the live message.
    pub examples: &'static [FewShotExample],
    pub max_sentences: usize,
    pub max_words: usize,
    pub max_questions: usize,
    /// Only strong-positive replies may carry the booking link.
    pub allows_calendar_link: bool,
}

/// Immutable `Category -> PromptTemplate` mapping.
#[derive(Debug)]
pub struct PromptCatalog {
    templates: HashMap<Category, PromptTemplate>,
}

impl PromptCatalog {
    fn build() -> Self {
        let templates = HashMap::from([
            (
                Category::StrongPositive,
                PromptTemplate {
                    instruction: templates::STRONG_POSITIVE_PROMPT,
                    examples: templates::STRONG_POSITIVE_EXAMPLES,
                    max_sentences: 3,
                    max_words: 40,
                    max_questions: 1,
                    allows_calendar_link: true,
                },
            ),
            (
                Category::SoftPositive,
                PromptTemplate {
                    instruction: templates::SOFT_POSITIVE_PROMPT,
                    examples: templates::SOFT_POSITIVE_EXAMPLES,
                    max_sentences: 3,
                    max_words: 45,
                    max_questions: 1,
                    allows_calendar_link: false,
                },
            ),
            (
                Category::Neutral,
                PromptTemplate {
                    instruction: templates::NEUTRAL_PROMPT,
                    examples: templates::NEUTRAL_EXAMPLES,
                    max_sentences: 3,
                    max_words: 45,
                    max_questions: 1,
                    allows_calendar_link: false,
                },
            ),
            (
                Category::SoftObjection,
                PromptTemplate {
                    instruction: templates::SOFT_OBJECTION_PROMPT,
                    examples: templates::SOFT_OBJECTION_EXAMPLES,
                    max_sentences: 3,
                    max_words: 40,
                    max_questions: 1,
                    allows_calendar_link: false,
                },
            ),
        ]);
        Self { templates }
    }

    /// Template for a category. `HardNo` has none.
    pub fn template(&self, category: Category) -> Option<&PromptTemplate> {
        self.templates.get(&category)
    }
}

static CATALOG: LazyLock<PromptCatalog> = LazyLock::new(PromptCatalog::build);

/// The process-wide prompt catalog.
pub fn catalog() -> &'static PromptCatalog {
    &CATALOG
}

/// Render the classifier instruction around a reply, verbatim.
pub fn classifier_prompt(message: &str) -> String {
    CLASSIFIER_PROMPT.replace("{message}", message)
}

/// Render a template's instruction with the operator context and, where the
/// template permits it, the calendar link.
pub fn render_instruction(template: &PromptTemplate, calendar_link: &str) -> String {
    let rendered = template.instruction.replace("{context}", OPERATOR_CONTEXT);
    if template.allows_calendar_link {
        rendered.replace("{calendar_link}", calendar_link)
    } else {
        rendered
    }
}

/// Render one few-shot turn with the calendar link substituted.
pub fn render_example(example: &FewShotExample, calendar_link: &str) -> String {
    example.content.replace("{calendar_link}", calendar_link)
}
