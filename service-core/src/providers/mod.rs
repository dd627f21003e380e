//! Text generation provider abstractions and implementations.
//!
//! Handlers depend on [`TextProvider`] only, so the Bedrock backend can be
//! swapped for the in-process mock in tests.

pub mod bedrock;
pub mod mock;

use crate::config::ModelConfig;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Model invocation failed: {0}")]
    Service(String),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl From<&ModelConfig> for GenerationParams {
    fn from(model: &ModelConfig) -> Self {
        Self {
            max_tokens: model.max_tokens,
            temperature: model.temperature,
            top_p: model.top_p,
        }
    }
}

/// Text produced by the model. Empty when the response carried none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedText {
    pub text: String,
    pub stop_reason: Option<String>,
}

impl GeneratedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Trait for text generation backends.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GeneratedText, InferenceError>;
}

#[derive(Debug, Deserialize)]
struct ModelOutput {
    #[serde(default)]
    completion: Option<String>,
    #[serde(default)]
    outputs: Option<Vec<OutputItem>>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    stop_reason: Option<String>,
}

/// Decode a raw model payload.
///
/// A non-empty `completion` wins, then `outputs[0].text`. Missing fields
/// yield empty text; only a payload that is not a JSON object is an error.
pub fn decode_output(raw: &[u8]) -> Result<GeneratedText, InferenceError> {
    let output: ModelOutput = serde_json::from_slice(raw)
        .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

    let first = output.outputs.and_then(|o| o.into_iter().next());
    let stop_reason = first.as_ref().and_then(|o| o.stop_reason.clone());

    let text = match output.completion.filter(|c| !c.is_empty()) {
        Some(completion) => completion,
        None => first.and_then(|o| o.text).unwrap_or_default(),
    };

    Ok(GeneratedText { text, stop_reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_outputs_shape() {
        let raw = br#"{"outputs":[{"text":"Cats are great.","stop_reason":"stop"}]}"#;
        let generated = decode_output(raw).unwrap();
        assert_eq!(generated.text, "Cats are great.");
        assert_eq!(generated.stop_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn completion_takes_precedence() {
        let raw = br#"{"completion":"from completion","outputs":[{"text":"from outputs"}]}"#;
        assert_eq!(decode_output(raw).unwrap().text, "from completion");
    }

    #[test]
    fn empty_completion_falls_through_to_outputs() {
        let raw = br#"{"completion":"","outputs":[{"text":"from outputs"}]}"#;
        assert_eq!(decode_output(raw).unwrap().text, "from outputs");
    }

    #[test]
    fn missing_fields_yield_empty_text() {
        let payloads: [&[u8]; 4] = [
            br#"{}"#,
            br#"{"outputs":[]}"#,
            br#"{"outputs":[{}]}"#,
            br#"{"outputs":null}"#,
        ];
        for raw in payloads {
            let generated = decode_output(raw).unwrap();
            assert!(generated.is_empty());
            assert_eq!(generated.stop_reason, None);
        }
    }

    #[test]
    fn malformed_payload_is_invalid_response() {
        let err = decode_output(b"not json").unwrap_err();
        assert!(matches!(err, InferenceError::InvalidResponse(_)));
    }

    #[test]
    fn params_follow_model_config() {
        let model = ModelConfig {
            model_id: "mistral.mistral-7b-instruct-v0:2".into(),
            max_tokens: 512,
            temperature: 0.5,
            top_p: 0.9,
        };
        let params = GenerationParams::from(&model);
        assert_eq!(params.max_tokens, 512);
        assert_eq!(params.temperature, 0.5);
        assert_eq!(params.top_p, 0.9);
    }
}
