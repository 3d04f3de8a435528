//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement.

use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("No content found for subject: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// The HTTP layer works against `Arc<dyn Storage>` and never couples to a
/// specific backend.
///
/// Semantics shared by all backends:
/// - `save` overwrites any existing entry for the subject (last writer
///   wins, no conflict detection).
/// - `load` returns `NotFound` when the subject has never been saved.
/// - keys are derived from the subject via the `keys` module; subjects that
///   fail sanitization yield `InvalidKey` before any I/O.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist content under the key derived from `subject`, returning the
    /// storage key.
    async fn save(&self, subject: &str, content: &str) -> StorageResult<String>;

    /// Load the content previously saved under `subject`.
    async fn load(&self, subject: &str) -> StorageResult<String>;

    /// Check whether any content is stored under `subject`.
    async fn exists(&self, subject: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
