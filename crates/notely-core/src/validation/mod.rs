//! Validation modules

mod note;

pub use note::{count_words, validate_note, ValidatedNote, ValidationError};
