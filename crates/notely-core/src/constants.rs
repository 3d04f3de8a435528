//! Shared constants.

/// Maximum number of whitespace-separated words accepted in a note body.
pub const MAX_CONTENT_WORDS: usize = 150;

/// Extension appended to the subject when deriving a storage key.
pub const NOTE_FILE_EXTENSION: &str = "txt";
