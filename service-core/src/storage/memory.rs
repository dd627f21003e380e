use super::{Storage, StorageError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory storage for tests. Records every write in order.
#[derive(Default)]
pub struct MemoryStorage {
    writes: Mutex<Vec<(String, Vec<u8>)>>,
    fail_with: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose every write fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// All successful writes, oldest first.
    pub fn writes(&self) -> Vec<(String, Vec<u8>)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Current object contents by key; later writes replace earlier ones.
    pub fn objects(&self) -> BTreeMap<String, Vec<u8>> {
        self.writes().into_iter().collect()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        if let Some(message) = &self.fail_with {
            return Err(StorageError::Upload {
                key: key.to_string(),
                message: message.clone(),
            });
        }

        if let Ok(mut writes) = self.writes.lock() {
            writes.push((key.to_string(), data));
        }
        Ok(())
    }

    fn uri(&self, key: &str) -> String {
        format!("memory://{}", key)
    }
}
