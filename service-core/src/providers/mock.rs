//! Mock provider implementation for testing.

use super::{GeneratedText, GenerationParams, InferenceError, TextProvider, decode_output};
use async_trait::async_trait;
use std::sync::Mutex;

enum Reply {
    Text(String),
    Raw(Vec<u8>),
    Fail(String),
}

/// Mock text provider that replays a scripted reply and records prompts.
pub struct MockTextProvider {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Reply with `text` on every call.
    pub fn returning(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    /// Reply with a raw model payload, decoded like a real response.
    pub fn returning_raw(payload: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(Reply::Raw(payload.into()))
    }

    /// Fail every call with a service error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<GeneratedText, InferenceError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            Reply::Text(text) => Ok(GeneratedText {
                text: text.clone(),
                stop_reason: Some("stop".to_string()),
            }),
            Reply::Raw(payload) => decode_output(payload),
            Reply::Fail(message) => Err(InferenceError::Service(message.clone())),
        }
    }
}
