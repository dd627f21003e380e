//! Cross-handler workflow test harness.
//!
//! Builds both handlers against scripted models and in-memory storage so
//! their behavior can be compared side by side.
//!
//! ## Usage
//!
//! ```bash
//! cargo test -p workflow-tests
//! ```

use blog_service::handlers::BlogHandler;
use serde_json::Value;
use service_core::envelope::RequestEnvelope;
use service_core::providers::mock::MockTextProvider;
use service_core::providers::GenerationParams;
use service_core::storage::MemoryStorage;
use std::sync::{Arc, Once};
use template_service::handlers::TemplateHandler;

static INIT: Once = Once::new();

/// Install a test log subscriber once per process. Honors `RUST_LOG`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// One handler of each kind, each wired to its own mock provider and storage.
pub struct HandlerPair {
    pub blog: BlogHandler,
    pub blog_provider: Arc<MockTextProvider>,
    pub blog_storage: Arc<MemoryStorage>,
    pub template: TemplateHandler,
    pub template_provider: Arc<MockTextProvider>,
    pub template_storage: Arc<MemoryStorage>,
}

impl HandlerPair {
    pub fn build(
        provider: impl Fn() -> MockTextProvider,
        storage: impl Fn() -> MemoryStorage,
    ) -> Self {
        init_test_logging();

        let blog_provider = Arc::new(provider());
        let blog_storage = Arc::new(storage());
        let template_provider = Arc::new(provider());
        let template_storage = Arc::new(storage());

        tracing::debug!("Built handler pair");

        HandlerPair {
            blog: BlogHandler::new(
                blog_provider.clone(),
                blog_storage.clone(),
                GenerationParams::from(&blog_service::config::default_model()),
            ),
            template: TemplateHandler::new(
                template_provider.clone(),
                template_storage.clone(),
                GenerationParams::from(&template_service::config::default_model()),
            ),
            blog_provider,
            blog_storage,
            template_provider,
            template_storage,
        }
    }
}

/// Envelope carrying `body` as a JSON-encoded string.
pub fn envelope(body: Value) -> RequestEnvelope {
    RequestEnvelope::with_body(&body)
}
