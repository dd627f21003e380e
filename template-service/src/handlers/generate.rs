//! CloudFormation template generation handler.
//!
//! Unlike the blog handler, inference and storage failures propagate and the
//! caller receives a 500 carrying the error message.

use crate::services::{build_template_prompt, normalize, template_key};
use chrono::Utc;
use serde::Serialize;
use service_core::envelope::{required_text, ApiResponse, RequestEnvelope};
use service_core::error::AppError;
use service_core::providers::{GenerationParams, TextProvider};
use service_core::storage::Storage;
use std::sync::Arc;

pub const REQUEST_FIELD: &str = "cfn_request";
pub const EMPTY_TEMPLATE_MESSAGE: &str = "Model returned empty template";

/// Characters of the template echoed back in the response.
pub const PREVIEW_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateResponse {
    pub s3_key: String,
    pub preview: String,
}

#[derive(Clone)]
pub struct TemplateHandler {
    provider: Arc<dyn TextProvider>,
    storage: Arc<dyn Storage>,
    params: GenerationParams,
}

impl TemplateHandler {
    pub fn new(
        provider: Arc<dyn TextProvider>,
        storage: Arc<dyn Storage>,
        params: GenerationParams,
    ) -> Self {
        Self {
            provider,
            storage,
            params,
        }
    }

    pub async fn handle(&self, envelope: RequestEnvelope) -> ApiResponse {
        match self.process(&envelope).await {
            Ok(response) => ApiResponse::ok_json(&response),
            Err(err) => {
                if err.status_code() >= 500 {
                    tracing::error!(error = %err, "Unhandled exception");
                } else {
                    tracing::warn!(error = %err, "Rejected template request");
                }
                err.into_response()
            }
        }
    }

    pub async fn process(&self, envelope: &RequestEnvelope) -> Result<TemplateResponse, AppError> {
        tracing::debug!(body = ?envelope.body, "Incoming event");

        let body = envelope.decode_body_or_empty()?;
        let request = required_text(&body, REQUEST_FIELD)?;

        let template = self.generate(&request).await?;
        if template.is_empty() {
            return Err(AppError::InternalError(anyhow::anyhow!(
                EMPTY_TEMPLATE_MESSAGE
            )));
        }

        let key = template_key(&Utc::now());
        let preview = preview(&template);
        self.storage.upload(&key, template.into_bytes()).await?;
        tracing::info!(
            location = %self.storage.uri(&key),
            "Saved generated template"
        );

        Ok(TemplateResponse {
            s3_key: key,
            preview,
        })
    }

    /// Invoke the model and reduce its output to the template body.
    async fn generate(&self, request: &str) -> Result<String, AppError> {
        let prompt = build_template_prompt(request);

        let generated = self
            .provider
            .generate(&prompt, &self.params)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Bedrock invocation error");
                e
            })?;

        tracing::debug!(
            chars = generated.text.chars().count(),
            stop_reason = ?generated.stop_reason,
            "Template generated"
        );

        Ok(normalize(&generated.text))
    }
}

fn preview(template: &str) -> String {
    template.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_truncated_by_characters() {
        let long = "é".repeat(PREVIEW_CHARS + 10);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS);
        assert!(long.starts_with(&cut));
    }

    #[test]
    fn short_template_is_previewed_whole() {
        assert_eq!(preview("Resources: {}"), "Resources: {}");
    }
}
