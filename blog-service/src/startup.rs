//! Application startup and lifecycle management.
//!
//! Clients are built once per cold start; every event then runs through the
//! same stateless handler.

use crate::config::BlogConfig;
use crate::handlers::BlogHandler;
use lambda_runtime::{service_fn, LambdaEvent};
use service_core::aws;
use service_core::envelope::{ApiResponse, RequestEnvelope};
use service_core::error::AppError;
use service_core::observability::invocation_span;
use service_core::providers::bedrock::BedrockTextProvider;
use service_core::providers::{GenerationParams, TextProvider};
use service_core::storage::build_storage;
use std::sync::Arc;
use tracing::Instrument;

pub const SERVICE_NAME: &str = "blog-service";

pub struct Application {
    handler: BlogHandler,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: BlogConfig) -> Result<Self, AppError> {
        let sdk_config = aws::load_sdk_config(&config.aws.region).await;

        let provider: Arc<dyn TextProvider> = Arc::new(BedrockTextProvider::new(
            aws::bedrock_client(&sdk_config, &config.aws),
            config.model.model_id.clone(),
        )?);
        tracing::info!(model = %config.model.model_id, "Initialized Bedrock text provider");

        let storage = build_storage(&config.storage, &sdk_config)
            .await
            .map_err(|e| {
                tracing::error!("Failed to initialize storage: {}", e);
                e
            })?;

        let handler = BlogHandler::new(provider, storage, GenerationParams::from(&config.model));
        Ok(Self { handler })
    }

    /// Serve Lambda events until the runtime shuts down.
    pub async fn run_until_stopped(self) -> Result<(), lambda_runtime::Error> {
        let handler = self.handler;

        lambda_runtime::run(service_fn(move |event: LambdaEvent<RequestEnvelope>| {
            let handler = handler.clone();
            async move {
                let span = invocation_span(SERVICE_NAME, &event.context.request_id);
                let response = handler.handle(event.payload).instrument(span).await;
                Ok::<ApiResponse, lambda_runtime::Error>(response)
            }
        }))
        .await
    }
}
