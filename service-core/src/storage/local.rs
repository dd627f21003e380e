use super::{Storage, StorageError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem-backed storage for running handlers outside AWS.
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        let path = self.base_path.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, data).await?;
        Ok(())
    }

    fn uri(&self, key: &str) -> String {
        self.base_path.join(key).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn upload_creates_nested_directories_and_overwrites() {
        let base = format!("target/test-storage-{}", Uuid::new_v4());
        let storage = LocalStorage::new(&base).await.unwrap();

        storage
            .upload("blog-output/120000.txt", b"first".to_vec())
            .await
            .unwrap();
        storage
            .upload("blog-output/120000.txt", b"second".to_vec())
            .await
            .unwrap();

        let written = fs::read(PathBuf::from(&base).join("blog-output/120000.txt"))
            .await
            .unwrap();
        assert_eq!(written, b"second");

        let _ = fs::remove_dir_all(&base).await;
    }
}
