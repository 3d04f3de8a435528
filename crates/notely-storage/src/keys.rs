//! Shared key derivation for storage backends.
//!
//! Key format: `{subject}.txt`. All backends must derive keys through this
//! module so the sanitization policy stays consistent.

use crate::traits::{StorageError, StorageResult};
use notely_core::constants::NOTE_FILE_EXTENSION;

/// Derive the storage key for a subject.
///
/// Subjects are used verbatim as the key stem, so anything that could
/// escape the storage root is rejected rather than encoded: path
/// separators, `..`, control characters, and a leading dot.
pub fn subject_key(subject: &str) -> StorageResult<String> {
    if subject.contains('/') || subject.contains('\\') {
        return Err(StorageError::InvalidKey(format!(
            "Subject '{}' contains a path separator",
            subject
        )));
    }
    if subject.contains("..") {
        return Err(StorageError::InvalidKey(format!(
            "Subject '{}' contains '..'",
            subject
        )));
    }
    if subject.starts_with('.') {
        return Err(StorageError::InvalidKey(format!(
            "Subject '{}' starts with a dot",
            subject
        )));
    }
    if subject.chars().any(|c| c.is_control()) {
        return Err(StorageError::InvalidKey(
            "Subject contains control characters".to_string(),
        ));
    }

    Ok(format!("{}.{}", subject, NOTE_FILE_EXTENSION))
}
