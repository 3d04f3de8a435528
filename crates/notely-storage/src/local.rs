use crate::keys::subject_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// One UTF-8 text file per subject, named `{subject}.txt`, inside the base
/// directory.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for note storage (e.g., "./data-storage")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    /// Ensure the base directory still exists (it may have been removed
    /// after construction).
    async fn ensure_base_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn save(&self, subject: &str, content: &str) -> StorageResult<String> {
        let key = subject_key(subject)?;
        let path = self.key_to_path(&key);
        let size = content.len();

        self.ensure_base_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage save successful"
        );

        Ok(key)
    }

    async fn load(&self, subject: &str) -> StorageResult<String> {
        let key = subject_key(subject)?;
        let path = self.key_to_path(&key);
        let start = std::time::Instant::now();

        // Read directly and inspect the error kind: only a genuinely missing
        // file is NotFound, anything else (permissions, I/O) is a read
        // failure. Also avoids a check-then-read window.
        let content = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(subject.to_string())
            } else {
                StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
            }
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = content.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage load successful"
        );

        Ok(content)
    }

    async fn exists(&self, subject: &str) -> StorageResult<bool> {
        let key = subject_key(subject)?;
        let path = self.key_to_path(&key);
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
