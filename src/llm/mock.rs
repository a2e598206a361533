//! In-process providers for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::provider::{CompletionRequest, CompletionResponse, FinishReason, LlmProvider, Role};
use crate::error::LlmError;

fn response(content: String) -> CompletionResponse {
    CompletionResponse {
        content,
        input_tokens: 100,
        output_tokens: 20,
        finish_reason: FinishReason::Stop,
        response_id: None,
    }
}

/// Returns queued replies in order and records every request.
pub(crate) struct ScriptedLlm {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlm {
    pub(crate) fn new(script: Vec<Result<String, LlmError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(replies.into_iter().map(|r| Ok(r.into())).collect())
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    fn model_name(&self) -> &str {
        "scripted"
    }

    fn cost_per_token(&self) -> (Decimal, Decimal) {
        (Decimal::ZERO, Decimal::ZERO)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(content)) => Ok(response(content)),
            Some(Err(e)) => Err(e),
            None => Err(LlmError::RequestFailed {
                provider: "scripted".into(),
                reason: "script exhausted".into(),
            }),
        }
    }
}

/// Answers with the last worked assistant turn in the request, the way a
/// well-behaved model imitates its few-shot examples.
pub(crate) struct FewShotEchoLlm {
    calls: Mutex<usize>,
}

impl FewShotEchoLlm {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl LlmProvider for FewShotEchoLlm {
    fn model_name(&self) -> &str {
        "few-shot-echo"
    }

    fn cost_per_token(&self) -> (Decimal, Decimal) {
        (Decimal::ZERO, Decimal::ZERO)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        *self.calls.lock().unwrap() += 1;
        let content = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.content.clone())
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: "few-shot-echo".into(),
                reason: "no assistant turn to imitate".into(),
            })?;
        Ok(response(content))
    }
}
