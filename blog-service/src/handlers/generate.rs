//! Blog generation handler.
//!
//! Inference and storage failures are logged and swallowed: the caller gets
//! the confirmation message whether or not a post was written.

use crate::services::{blog_output_key, build_blog_prompt};
use chrono::Local;
use service_core::envelope::{required_text, ApiResponse, RequestEnvelope};
use service_core::error::AppError;
use service_core::providers::{GeneratedText, GenerationParams, TextProvider};
use service_core::storage::Storage;
use std::sync::Arc;

pub const TOPIC_FIELD: &str = "blog_topic";
pub const COMPLETION_MESSAGE: &str = "Blog generation is completed";

/// What a successful invocation actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogOutcome {
    /// Post written at `key`.
    Stored { key: String },
    /// Model produced nothing, or the call failed; nothing written.
    NotGenerated,
    /// Post generated but the write to `key` failed.
    StoreFailed { key: String },
}

#[derive(Clone)]
pub struct BlogHandler {
    provider: Arc<dyn TextProvider>,
    storage: Arc<dyn Storage>,
    params: GenerationParams,
}

impl BlogHandler {
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
            Ok(outcome) => {
                tracing::info!(outcome = ?outcome, "Blog request finished");
                ApiResponse::ok_json(COMPLETION_MESSAGE)
            }
            Err(err) => {
                if err.status_code() >= 500 {
                    tracing::error!(error = %err, "Unhandled exception");
                } else {
                    tracing::warn!(error = %err, "Rejected blog request");
                }
                err.into_response()
            }
        }
    }

    /// Run the pipeline. Only request validation can fail.
    pub async fn process(&self, envelope: &RequestEnvelope) -> Result<BlogOutcome, AppError> {
        tracing::debug!(body = ?envelope.body, "Event received");

        let body = envelope.decode_body()?;
        let topic = required_text(&body, TOPIC_FIELD)?;

        let generated = self.generate(&topic).await;
        if generated.is_empty() {
            tracing::warn!("No blog was generated");
            return Ok(BlogOutcome::NotGenerated);
        }

        let key = blog_output_key(&Local::now());
        match self.storage.upload(&key, generated.text.into_bytes()).await {
            Ok(()) => {
                tracing::info!(location = %self.storage.uri(&key), "Blog saved");
                Ok(BlogOutcome::Stored { key })
            }
            Err(e) => {
                tracing::error!(error = %e, key = %key, "Error saving the blog");
                Ok(BlogOutcome::StoreFailed { key })
            }
        }
    }

    async fn generate(&self, topic: &str) -> GeneratedText {
        let prompt = build_blog_prompt(topic);

        match self.provider.generate(&prompt, &self.params).await {
            Ok(generated) => {
                tracing::debug!(
                    chars = generated.text.chars().count(),
                    stop_reason = ?generated.stop_reason,
                    "Blog generated"
                );
                generated
            }
            Err(e) => {
                tracing::error!(error = %e, "Error generating the blog");
                GeneratedText::default()
            }
        }
    }
}
