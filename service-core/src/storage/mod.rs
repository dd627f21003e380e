//! Object storage backends.
//!
//! Writes are whole-object puts that overwrite whatever sits at the key.
//! Nothing here reads objects back.

pub mod local;
pub mod memory;
pub mod s3;

pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use s3::S3Storage;

use crate::config::{StorageBackend, StorageConfig};
use async_trait::async_trait;
use aws_config::SdkConfig;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {key}: {message}")]
    Upload { key: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn upload(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError>;

    /// Human-readable location of `key`, used in logs.
    fn uri(&self, key: &str) -> String;
}

/// Build the configured backend.
pub async fn build_storage(
    config: &StorageConfig,
    sdk_config: &SdkConfig,
) -> Result<Arc<dyn Storage>, StorageError> {
    let storage: Arc<dyn Storage> = match config.backend {
        StorageBackend::S3 => Arc::new(S3Storage::new(
            crate::aws::s3_client(sdk_config),
            config.bucket.clone(),
        )),
        StorageBackend::Local => Arc::new(LocalStorage::new(&config.local_path).await?),
    };

    tracing::info!(backend = ?config.backend, bucket = %config.bucket, "Initialized storage");
    Ok(storage)
}
