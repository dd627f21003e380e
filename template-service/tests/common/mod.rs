#![allow(dead_code)]

use serde_json::Value;
use service_core::envelope::RequestEnvelope;
use service_core::providers::mock::MockTextProvider;
use service_core::providers::GenerationParams;
use service_core::storage::MemoryStorage;
use std::sync::Arc;
use template_service::config::default_model;
use template_service::handlers::TemplateHandler;

pub struct TestApp {
    pub handler: TemplateHandler,
    pub provider: Arc<MockTextProvider>,
    pub storage: Arc<MemoryStorage>,
}

impl TestApp {
    pub fn spawn(provider: MockTextProvider, storage: MemoryStorage) -> Self {
        let provider = Arc::new(provider);
        let storage = Arc::new(storage);
        let handler = TemplateHandler::new(
            provider.clone(),
            storage.clone(),
            GenerationParams::from(&default_model()),
        );

        TestApp {
            handler,
            provider,
            storage,
        }
    }

    /// App whose model always answers with `text`.
    pub fn replying(text: &str) -> Self {
        Self::spawn(MockTextProvider::returning(text), MemoryStorage::new())
    }
}

/// Envelope carrying `body` as a JSON-encoded string.
pub fn envelope(body: Value) -> RequestEnvelope {
    RequestEnvelope::with_body(&body)
}
