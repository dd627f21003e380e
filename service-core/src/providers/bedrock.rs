//! Bedrock provider implementation.
//!
//! Calls `InvokeModel` on the Bedrock runtime with a Mistral-style prompt
//! body. Timeouts and retries live on the client, see [`crate::aws`].

use super::{GeneratedText, GenerationParams, InferenceError, TextProvider, decode_output};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock text provider bound to a single model.
pub struct BedrockTextProvider {
    client: BedrockClient,
    model_id: String,
}

impl BedrockTextProvider {
    pub fn new(
        client: BedrockClient,
        model_id: impl Into<String>,
    ) -> Result<Self, InferenceError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(InferenceError::NotConfigured(
                "MODEL_ID must name a Bedrock model".to_string(),
            ));
        }

        Ok(Self { client, model_id })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InvokeBody<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

impl<'a> InvokeBody<'a> {
    pub(crate) fn new(prompt: &'a str, params: &GenerationParams) -> Self {
        Self {
            prompt,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        }
    }
}

#[async_trait]
impl TextProvider for BedrockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GeneratedText, InferenceError> {
        let body = serde_json::to_vec(&InvokeBody::new(prompt, params))
            .map_err(|e| InferenceError::Service(format!("Failed to encode request: {}", e)))?;

        tracing::debug!(
            model = %self.model_id,
            prompt_len = prompt.len(),
            max_tokens = params.max_tokens,
            "Sending request to Bedrock"
        );

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| InferenceError::Service(DisplayErrorContext(&e).to_string()))?;

        let raw = response.body().as_ref();
        tracing::debug!(
            model = %self.model_id,
            raw_response = %String::from_utf8_lossy(raw),
            "Raw model response"
        );

        decode_output(raw)
    }
}
