//! Notely Storage Library
//!
//! This crate provides the storage abstraction and implementations for
//! Notely. It includes the Storage trait and implementations for S3 and the
//! local filesystem.
//!
//! # Storage key format
//!
//! Each subject maps to exactly one key: `{subject}.txt`. Key derivation is
//! centralized in the `keys` module; subjects that would escape the storage
//! root (path separators, `..`, control characters) are rejected there, so
//! every backend enforces the same policy.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use notely_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
