//! service-core: Shared infrastructure for the Bedrock generation handlers.
pub mod aws;
pub mod config;
pub mod envelope;
pub mod error;
pub mod observability;
pub mod providers;
pub mod storage;

pub use async_trait;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
