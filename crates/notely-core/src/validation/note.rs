//! Admission checks for note submissions.
//!
//! Validation is pure and runs before any storage I/O, so a rejected request
//! never reaches a backend.

use crate::constants::MAX_CONTENT_WORDS;
use thiserror::Error;

/// Validation failures for a submitted note.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Subject cannot be empty")]
    EmptySubject,

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Content is {words} words, maximum is {max}")]
    ContentTooLong { words: usize, max: usize },
}

/// A note that passed admission checks: trimmed subject and content plus the
/// word count computed during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNote {
    pub subject: String,
    pub content: String,
    pub word_count: usize,
}

/// Count whitespace-separated words.
///
/// Any run of one or more whitespace characters is a single separator. This
/// must stay plain whitespace splitting (`str::split_whitespace`), not
/// punctuation-aware tokenization, so counts stay compatible with what was
/// accepted at save time.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate a submitted subject and content.
///
/// Trims both inputs, rejects blank values, and enforces the word cap. On
/// success returns the trimmed pair along with the computed word count.
pub fn validate_note(subject: &str, content: &str) -> Result<ValidatedNote, ValidationError> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(ValidationError::EmptySubject);
    }

    let content = content.trim();
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    let word_count = count_words(content);
    if word_count > MAX_CONTENT_WORDS {
        return Err(ValidationError::ContentTooLong {
            words: word_count,
            max: MAX_CONTENT_WORDS,
        });
    }

    Ok(ValidatedNote {
        subject: subject.to_string(),
        content: content.to_string(),
        word_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_valid_note_returns_trimmed_pair() {
        let validated = validate_note("  math ", " two plus two is four\n").unwrap();
        assert_eq!(validated.subject, "math");
        assert_eq!(validated.content, "two plus two is four");
        assert_eq!(validated.word_count, 5);
    }

    #[test]
    fn test_empty_subject_rejected() {
        assert_eq!(
            validate_note("", "hello"),
            Err(ValidationError::EmptySubject)
        );
    }

    #[test]
    fn test_whitespace_only_subject_rejected() {
        assert_eq!(
            validate_note("  ", "x"),
            Err(ValidationError::EmptySubject)
        );
    }

    #[test]
    fn test_whitespace_only_content_rejected() {
        assert_eq!(
            validate_note("sub", "   "),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_irregular_whitespace_counted_as_single_separators() {
        assert_eq!(count_words("a  b   c"), 3);
        assert_eq!(count_words("a\t b\nc"), 3);
    }

    #[test]
    fn test_word_cap_boundary() {
        assert!(validate_note("sub", &words(150)).is_ok());
        assert_eq!(
            validate_note("sub", &words(151)),
            Err(ValidationError::ContentTooLong {
                words: 151,
                max: 150
            })
        );
    }

    #[test]
    fn test_too_long_carries_exact_count() {
        let err = validate_note("sub", &words(200)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ContentTooLong {
                words: 200,
                max: 150
            }
        );
    }
}
