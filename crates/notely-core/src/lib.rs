//! Notely Core Library
//!
//! This crate provides the core domain model, error types, configuration, and
//! validation shared across all Notely components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::Note;
pub use storage_types::StorageBackend;
pub use validation::{validate_note, ValidatedNote, ValidationError};
